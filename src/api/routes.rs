use actix_web::{error::InternalError, web, HttpResponse};

use crate::{api::handlers::update_maze, models::request::ErrorResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(update_maze);
}

/// JSON extractor settings: body size limit, and a 400 with a readable
/// message when the payload does not deserialize.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = format!("JSON deserialization error: {err}");
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse { error: message }),
            )
            .into()
        })
}
