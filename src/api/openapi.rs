use utoipa::OpenApi;

use crate::models::{
    instruction::Instruction,
    request::{ErrorResponse, MazeRequest, MazeResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Maze Robot API",
        description = "Grid maze navigation: send the maze, the robot's position and its goal; get back the discovered path and the next move.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(crate::api::handlers::maze::update_maze),
    components(schemas(MazeRequest, MazeResponse, Instruction, ErrorResponse)),
    tags(
        (name = "maze", description = "Maze navigation — path search and next move"),
    )
)]
pub struct ApiDoc;
