use crate::{
    error::MazeError,
    models::{
        instruction::{Direction, Instruction, DIRECTIONS},
        Path, Position,
    },
};

/// A discovered path together with every move needed to walk it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    pub instructions: Vec<Instruction>,
}

impl Route {
    pub fn from_path(path: Path) -> Result<Self, MazeError> {
        let instructions = translate(&path)?;
        debug_assert!(
            path.first()
                .map_or(true, |&start| replay(start, &instructions).as_ref() == Some(&path)),
            "instructions do not replay the path"
        );
        Ok(Self { path, instructions })
    }

    /// The immediate next move, if any.
    pub fn next_instruction(&self) -> Option<Instruction> {
        self.instructions.first().copied()
    }
}

/// Converts each consecutive pair of the path into a move.
/// Fails when a pair is not exactly one orthogonal step apart.
pub fn translate(path: &[Position]) -> Result<Vec<Instruction>, MazeError> {
    path.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (from, to) = (pair[0], pair[1]);
            direction_between(from, to)
                .map(Instruction::from)
                .ok_or(MazeError::MalformedPath { index, from, to })
        })
        .collect()
}

/// Walks `instructions` one step at a time from `start`.
/// Returns `None` if a step would leave the non-negative quadrant.
pub fn replay(start: Position, instructions: &[Instruction]) -> Option<Path> {
    let mut path = Vec::with_capacity(instructions.len() + 1);
    path.push(start);
    let mut current = start;
    for instruction in instructions {
        current = current.step(instruction.direction())?;
        path.push(current);
    }
    Some(path)
}

fn direction_between(from: Position, to: Position) -> Option<Direction> {
    DIRECTIONS
        .into_iter()
        .find(|&d| from.step(d) == Some(to))
}
