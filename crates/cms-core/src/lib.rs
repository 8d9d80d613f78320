//! # CMS Core
//!
//! The domain layer of the studio CMS.
//! This crate contains content entities, the query pipeline, and the ports
//! that infrastructure implements - with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;

pub use error::ContentError;
