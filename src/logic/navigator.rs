use log::{debug, error, warn};

use crate::{
    error::MazeError,
    logic::{
        instructions::Route,
        search::{find_path, validate_endpoints},
    },
    models::{
        grid::Grid,
        request::{MazeRequest, MazeResponse},
    },
};

/// Computes the next move for one request. Holds no state between calls.
///
/// An unreachable goal is a normal outcome: the response carries an empty
/// path and no instruction.
pub fn navigate(request: MazeRequest) -> Result<MazeResponse, MazeError> {
    let MazeRequest {
        matrix,
        current,
        goal,
    } = request;

    let grid = Grid::from_markers(&matrix).inspect_err(|e| warn!("rejected maze: {e}"))?;
    validate_endpoints(&grid, current, goal).inspect_err(|e| warn!("rejected maze: {e}"))?;

    let path = find_path(&grid, current, goal);
    let route = Route::from_path(path).inspect_err(|e| error!("search produced a bad path: {e}"))?;
    debug!(
        "{}x{} maze, {current} -> {goal}: next move {:?}",
        grid.rows,
        grid.cols,
        route.next_instruction()
    );

    Ok(MazeResponse {
        matrix,
        instructions: route.next_instruction().into_iter().collect(),
        path: route.path,
    })
}
