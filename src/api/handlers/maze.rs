use actix_web::{post, web, HttpResponse};

use crate::{error::MazeError, logic::navigator::navigate, models::request::MazeRequest};

/// POST /update_maze
/// Computes a path from `current` to `goal` and returns the robot's next move.
#[utoipa::path(
    post,
    path = "/update_maze",
    tag = "maze",
    request_body = MazeRequest,
    responses(
        (status = 200, description = "Next move and discovered path (both empty when the goal is unreachable)", body = crate::models::request::MazeResponse),
        (status = 400, description = "Malformed JSON, irregular matrix, or invalid current/goal", body = crate::models::request::ErrorResponse),
        (status = 500, description = "Search produced a path that cannot be turned into moves", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/update_maze")]
pub async fn update_maze(body: web::Json<MazeRequest>) -> Result<HttpResponse, MazeError> {
    let response = navigate(body.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
