use log::debug;

use crate::{
    error::MazeError,
    models::{grid::Grid, Matrix, Path, Position},
};

/// Depth-first search from `start` to `goal` over passable cells.
///
/// Uses an explicit LIFO work-list of positions. A cell is marked visited, and
/// its parent recorded, when pushed; the goal is recognised while expanding its
/// parent's neighbours and the path is rebuilt by walking parents back to
/// `start`. Neighbours are pushed in Up, Right, Down, Left order and therefore
/// popped in reverse. Work and memory are linear in the cell count.
///
/// The first path found is returned; it is not necessarily the shortest.
/// Returns an empty path when the goal is unreachable or either endpoint lies
/// outside the grid. `start == goal` yields `[start]` when start is passable.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Path {
    if !grid.contains(start) || !grid.contains(goal) {
        return vec![];
    }
    if start == goal {
        return if grid.is_passable(start) { vec![start] } else { vec![] };
    }

    let mut visited: Matrix<bool> = vec![vec![false; grid.cols]; grid.rows];
    let mut parents: Matrix<Option<Position>> = vec![vec![None; grid.cols]; grid.rows];
    let mut stack: Vec<Position> = vec![start];
    visited[start.row][start.col] = true;
    let mut visited_count = 1usize;

    while let Some(vertex) = stack.pop() {
        for next in grid.neighbors(vertex) {
            if visited[next.row][next.col] {
                continue;
            }
            if next == goal {
                let path = trace_back(&parents, vertex, goal);
                debug!("path found from {start} to {goal} in {} step(s)", path.len() - 1);
                return path;
            }
            visited[next.row][next.col] = true;
            visited_count += 1;
            parents[next.row][next.col] = Some(vertex);
            stack.push(next);
        }
    }

    debug!("no path from {start} to {goal} after visiting {visited_count} cell(s)");
    vec![]
}

/// Follows recorded parents from `last` back to the start, then appends `goal`.
fn trace_back(parents: &Matrix<Option<Position>>, last: Position, goal: Position) -> Path {
    let mut path = vec![goal, last];
    let mut current = last;
    while let Some(parent) = parents[current.row][current.col] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Rejects endpoints that are outside the grid or sit on a wall.
pub fn validate_endpoints(grid: &Grid, start: Position, goal: Position) -> Result<(), MazeError> {
    for (role, pos) in [("Current", start), ("Goal", goal)] {
        if !grid.contains(pos) {
            return Err(MazeError::OutOfBounds {
                role,
                pos,
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        if !grid.is_passable(pos) {
            return Err(MazeError::BlockedCell { role, pos });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::models::grid::ascii_grid;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn is_connected(path: &[Position]) -> bool {
        path.windows(2)
            .all(|w| w[0].row.abs_diff(w[1].row) + w[0].col.abs_diff(w[1].col) == 1)
    }

    #[test]
    fn test_open_3x3_follows_lifo_order() {
        let grid = ascii_grid(&["   ", "   ", "   "]);
        let path = find_path(&grid, p(0, 0), p(2, 2));
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn test_goal_behind_full_wall_is_unreachable() {
        let grid = ascii_grid(&["   ", "***", "   "]);
        assert!(find_path(&grid, p(0, 0), p(2, 0)).is_empty());
    }

    #[test]
    fn test_path_through_single_opening() {
        let grid = ascii_grid(&["   ", "** ", "   "]);
        let path = find_path(&grid, p(0, 0), p(2, 0));
        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(2, 0)));
        assert!(path.contains(&p(1, 2)), "path must go through the opening");
        assert!(is_connected(&path));
        assert!(path.iter().all(|&pos| grid.is_passable(pos)));
    }

    #[test]
    fn test_not_necessarily_shortest() {
        // Two steps to the right, but the down branch is explored first.
        let grid = ascii_grid(&["   ", "   ", "   "]);
        let path = find_path(&grid, p(0, 0), p(0, 2));
        assert_eq!(
            path,
            vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2), p(1, 2), p(0, 2)]
        );
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = ascii_grid(&["  ", "  "]);
        assert_eq!(find_path(&grid, p(1, 1), p(1, 1)), vec![p(1, 1)]);
    }

    #[test]
    fn test_goal_out_of_bounds_is_empty() {
        let grid = ascii_grid(&["  ", "  "]);
        assert!(find_path(&grid, p(0, 0), p(5, 5)).is_empty());
        assert!(find_path(&grid, p(9, 0), p(0, 0)).is_empty());
    }

    #[test]
    fn test_blocked_goal_is_empty() {
        let grid = ascii_grid(&[" *", "  "]);
        assert!(find_path(&grid, p(1, 1), p(0, 1)).is_empty());
    }

    #[test]
    fn test_open_grids_always_have_a_path() {
        for (rows, cols) in [(1, 1), (1, 5), (4, 1), (3, 4), (5, 5)] {
            let row = " ".repeat(cols);
            let grid = ascii_grid(&vec![row.as_str(); rows]);
            let cells: Vec<Position> = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| p(r, c)))
                .collect();
            for &start in &cells {
                for &goal in &cells {
                    let path = find_path(&grid, start, goal);
                    assert_eq!(path.first(), Some(&start), "{rows}x{cols} {start} -> {goal}");
                    assert_eq!(path.last(), Some(&goal), "{rows}x{cols} {start} -> {goal}");
                    assert!(is_connected(&path));
                }
            }
        }
    }

    #[test]
    fn test_large_grid_search_is_linear() {
        // 300x300 open grid; the bottom-right corner is sealed off by two walls.
        let n = 300;
        let open = " ".repeat(n);
        let sealed_row = format!("{}*", " ".repeat(n - 1));
        let last_row = format!("{}* ", " ".repeat(n - 2));
        let mut rows: Vec<&str> = vec![open.as_str(); n - 2];
        rows.push(sealed_row.as_str());
        rows.push(last_row.as_str());
        let grid = ascii_grid(&rows);

        let started = Instant::now();
        assert!(find_path(&grid, p(0, 0), p(n - 1, n - 1)).is_empty());
        let path = find_path(&grid, p(0, 0), p(n - 1, n - 3));
        let elapsed = started.elapsed();

        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(n - 1, n - 3)));
        assert!(is_connected(&path));
        assert!(
            elapsed < Duration::from_secs(5),
            "two searches over {} cells took {elapsed:?}",
            n * n
        );
    }

    #[test]
    fn test_validate_endpoints() {
        let grid = ascii_grid(&[" *", "  "]);
        assert!(validate_endpoints(&grid, p(0, 0), p(1, 1)).is_ok());
        assert!(matches!(
            validate_endpoints(&grid, p(0, 0), p(2, 0)),
            Err(MazeError::OutOfBounds { role: "Goal", .. })
        ));
        assert!(matches!(
            validate_endpoints(&grid, p(0, 1), p(1, 1)),
            Err(MazeError::BlockedCell { role: "Current", .. })
        ));
    }
}
