//! Middleware and boundary error handling.

pub mod error;

pub use error::{AppError, AppResult};
