use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{request::ErrorResponse, Position};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Matrix must be rectangular: row {row} has {found} cell(s), expected {expected}.")]
    IrregularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{role} position {pos} is outside the {rows}x{cols} matrix.")]
    OutOfBounds {
        role: &'static str,
        pos: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{role} position {pos} is on a blocked cell.")]
    BlockedCell { role: &'static str, pos: Position },

    /// Two consecutive path cells are not one orthogonal step apart.
    #[error("Path step {index} from {from} to {to} is not a single orthogonal move.")]
    MalformedPath {
        index: usize,
        from: Position,
        to: Position,
    },
}

impl ResponseError for MazeError {
    fn status_code(&self) -> StatusCode {
        match self {
            MazeError::MalformedPath { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
