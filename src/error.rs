// src/error.rs
// =============================================================================
// AppError: why a README request failed, and how that maps to HTTP.
//
//   BadRequest, InvalidReference -> 400
//   Fetch(NotFound)              -> 404
//   Fetch(Upstream)              -> 502
// =============================================================================

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::github::{FetchError, InvalidReference};

/// Everything that can make a README request fail.
///
/// Generation problems are not here: they are handled by falling back to the
/// README template, so they never reach the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is unusable (missing URL, malformed JSON)
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    InvalidReference(#[from] InvalidReference),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidReference(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(FetchError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Fetch(FetchError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(FailureBody {
            success: false,
            message: self.to_string(),
        })
    }
}
