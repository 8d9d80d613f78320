//! # CMS Infrastructure
//!
//! Concrete implementations of the ports defined in `cms-core`, the seeded
//! content catalog, and the `ContentService` that runs the query pipeline
//! behind a TTL cache.

pub mod cache;
pub mod catalog;
pub mod chaos;
pub mod service;

pub use cache::InMemoryCache;
pub use catalog::Catalog;
pub use chaos::{NoChaos, SimulatedChaos};
pub use service::ContentService;
