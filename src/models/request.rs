use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{grid::CellMarker, instruction::Instruction, Matrix, Path, Position};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MazeRequest {
    /// Rectangular maze. `"*"` marks a wall; any other value is free.
    #[schema(value_type = Vec<Vec<Object>>)]
    pub matrix: Matrix<CellMarker>,
    /// Robot position as `[row, col]`.
    #[schema(value_type = Vec<usize>)]
    pub current: Position,
    /// Target position as `[row, col]`.
    #[schema(value_type = Vec<usize>)]
    pub goal: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MazeResponse {
    /// The request matrix, unchanged.
    #[schema(value_type = Vec<Vec<Object>>)]
    pub matrix: Matrix<CellMarker>,
    /// Zero or one move: the immediate next step towards the goal.
    pub instructions: Vec<Instruction>,
    /// Full discovered path as `[row, col]` pairs; empty when the goal is unreachable.
    #[schema(value_type = Vec<Vec<usize>>)]
    pub path: Path,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
