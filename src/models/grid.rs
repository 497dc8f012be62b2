use serde::{Deserialize, Serialize};

use crate::{
    error::MazeError,
    models::{instruction::DIRECTIONS, Matrix, Position},
};

/// Reserved marker for a wall cell.
pub const BLOCKED_MARKER: &str = "*";

/// A single cell of the maze exactly as the client sent it.
/// - `"*"` JSON → blocked
/// - any other string, number, boolean or `null` → passable
///
/// The raw value is kept so the matrix can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellMarker {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Empty(()),
}

impl CellMarker {
    pub fn is_blocked(&self) -> bool {
        matches!(self, CellMarker::Text(s) if s == BLOCKED_MARKER)
    }
}

impl From<&str> for CellMarker {
    fn from(s: &str) -> Self {
        CellMarker::Text(s.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Passable,
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Matrix<Cell>,
}

impl Grid {
    /// Builds a grid from the client's markers, rejecting rows of unequal length.
    /// An empty matrix yields an empty grid.
    pub fn from_markers(markers: &Matrix<CellMarker>) -> Result<Self, MazeError> {
        let rows = markers.len();
        let cols = markers.first().map_or(0, Vec::len);

        let cells = markers
            .iter()
            .enumerate()
            .map(|(r, row)| {
                if row.len() != cols {
                    return Err(MazeError::IrregularGrid {
                        row: r,
                        expected: cols,
                        found: row.len(),
                    });
                }
                Ok(row
                    .iter()
                    .map(|m| if m.is_blocked() { Cell::Blocked } else { Cell::Passable })
                    .collect())
            })
            .collect::<Result<Matrix<Cell>, _>>()?;

        Ok(Self { rows, cols, cells })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// False for out-of-bounds positions.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[pos.row][pos.col] == Cell::Passable
    }

    /// Passable in-bounds cells one orthogonal step from `pos`, in
    /// Up, Right, Down, Left order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .filter_map(|&d| pos.step(d))
            .filter(|&next| self.is_passable(next))
            .collect()
    }
}

/// Builds a grid from ASCII rows, one character per cell.
#[cfg(test)]
pub(crate) fn ascii_grid(rows: &[&str]) -> Grid {
    let markers: Matrix<CellMarker> = rows
        .iter()
        .map(|row| row.chars().map(|c| CellMarker::Text(c.to_string())).collect())
        .collect();
    Grid::from_markers(&markers).unwrap()
}
