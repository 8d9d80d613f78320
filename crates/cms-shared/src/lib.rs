//! # CMS Shared
//!
//! Wire-level types shared between the server and its clients: the
//! `{data, meta}` response envelope, the error body, and the list-query DTO.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorBody, Meta};
