//! Error handling at the endpoint boundary.
//!
//! Every pipeline error converts to a status code and `{"error": ...}` body
//! here, and is logged here - not deeper inside the pipeline - so each
//! failure is logged exactly once.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cms_core::ContentError;
use cms_shared::ErrorBody;
use std::fmt;

/// Application-level error type carrying the public message for each status.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::debug!("not found: {}", msg);
                msg
            }
            AppError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                msg
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorBody::new(message))
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound { resource, .. } => {
                AppError::NotFound(format!("{} not found", resource))
            }
            ContentError::FetchFailed { resource } => {
                AppError::Internal(format!("Failed to fetch {}", resource))
            }
            ContentError::Internal(detail) => {
                // Keep internal details out of the response body.
                tracing::error!("internal content error: {}", detail);
                AppError::Internal("Internal server error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_map_to_their_statuses() {
        let not_found: AppError = ContentError::NotFound {
            resource: "Game",
            slug: "missing".into(),
        }
        .into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let failed: AppError = ContentError::FetchFailed { resource: "games" }.into();
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.to_string(), "Internal error: Failed to fetch games");
    }
}
