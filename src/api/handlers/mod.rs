pub mod maze;

pub use maze::update_maze;
