// src/server/mod.rs
// =============================================================================
// The HTTP side of the app: actix-web server, CORS and routes.
//
// Routes:
//   GET  /                     -> status
//   GET  /status               -> status
//   POST /api/generate-readme  -> {"repoUrl": "..."} -> {"success", "content"|"message"}
//   *                          -> 404 {"message": "Route not found"}
// =============================================================================

mod handlers;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use crate::service::ReadmeService;

pub(crate) fn cors(origin: &str) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST"])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600);

    if origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(origin)
    }
}

pub async fn run(config: &Config, service: ReadmeService) -> std::io::Result<()> {
    let service = web::Data::new(service);
    let origin = config.cors_origin.clone();

    info!(host = %config.host, port = config.port, cors_origin = %origin, "Starting readme-crafter server");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .wrap(cors(&origin))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
