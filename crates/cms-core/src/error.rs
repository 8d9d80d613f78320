//! Domain-level error types.

use thiserror::Error;

/// Content lookup and fetch failures.
///
/// `NotFound` is a distinct variant rather than a message pattern so callers
/// can map it to a 404 without sniffing error strings.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{resource} not found: {slug}")]
    NotFound { resource: &'static str, slug: String },

    #[error("Failed to fetch {resource}")]
    FetchFailed { resource: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// The public resource label ("Blog post", "Game", ...) this error is about.
    pub fn resource(&self) -> Option<&'static str> {
        match self {
            ContentError::NotFound { resource, .. } => Some(resource),
            ContentError::FetchFailed { resource } => Some(resource),
            ContentError::Internal(_) => None,
        }
    }
}
