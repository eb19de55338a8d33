// src/server/handlers.rs
// =============================================================================
// Request handlers: README generation plus the status and 404 responses.
//
// Every failure leaves as an AppError, which renders itself as
// {"success": false, "message": ...} (see error.rs).
// =============================================================================

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;
use crate::service::ReadmeService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReadmeRequest {
    pub repo_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateReadmeResponse {
    success: bool,
    content: String,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
}

/// POST /api/generate-readme
///
/// Generate a README for the repository in `repoUrl`.
pub async fn generate_readme(
    service: web::Data<ReadmeService>,
    body: web::Json<GenerateReadmeRequest>,
) -> Result<HttpResponse, AppError> {
    let repo_url = body
        .into_inner()
        .repo_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::BadRequest("Repository URL is required".to_string()))?;

    let readme = service.generate(&repo_url).await.map_err(|e| {
        warn!(%repo_url, error = %e, "README request failed");
        e
    })?;

    Ok(HttpResponse::Ok().json(GenerateReadmeResponse {
        success: true,
        content: readme.content,
    }))
}

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "online",
        message: "readme-crafter API is running",
    })
}

/// GET /status
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "online",
        message: "Server is running",
    })
}

/// Fallback for every unknown route
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Route not found" }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same {success, message} shape as other failures
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.route("/", web::get().to(root))
        .route("/status", web::get().to(status))
        .service(
            web::scope("/api")
                .app_data(json_config)
                .route("/generate-readme", web::post().to(generate_readme)),
        );
}
