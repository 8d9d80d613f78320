//! The `{data, meta}` response envelope used by every CMS endpoint.

use serde::{Deserialize, Serialize};

use cms_core::query::{Paged, Pagination};

/// Response metadata. Single-item responses serialize this as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Standard CMS response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    /// Envelope for a single-item response: `{data, meta: {}}`.
    pub fn item(data: T) -> Self {
        Self {
            data,
            meta: Meta::default(),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Envelope for a list response with pagination metadata.
    pub fn list(page: Paged<T>) -> Self {
        Self {
            data: page.items,
            meta: Meta {
                pagination: Some(page.pagination),
            },
        }
    }
}

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
