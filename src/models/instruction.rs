use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One orthogonal step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Neighbour enumeration order. Path search depends on it for tie-breaking,
/// so changing it changes which path is found first.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// (row delta, col delta)
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Movement command sent to the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Instruction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl Instruction {
    pub const fn direction(self) -> Direction {
        match self {
            Instruction::MoveUp => Direction::Up,
            Instruction::MoveDown => Direction::Down,
            Instruction::MoveLeft => Direction::Left,
            Instruction::MoveRight => Direction::Right,
        }
    }
}

impl From<Direction> for Instruction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Instruction::MoveUp,
            Direction::Right => Instruction::MoveRight,
            Direction::Down => Instruction::MoveDown,
            Direction::Left => Instruction::MoveLeft,
        }
    }
}
