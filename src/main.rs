use actix_web::{middleware, App, HttpServer};
use log::info;
use maze_robot::{
    api::{
        openapi::ApiDoc,
        routes::{configure, json_config},
    },
    config::ServerConfig,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr();
    let json_limit = config.json_limit;

    info!("Maze robot API started at http://{bind_addr}");
    info!("   POST /update_maze");
    info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let openapi = ApiDoc::openapi();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .app_data(json_config(json_limit))
    })
    .bind(bind_addr)?
    .run()
    .await
}
