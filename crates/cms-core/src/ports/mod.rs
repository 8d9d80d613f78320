//! Ports - trait definitions for infrastructure concerns.
//! These are the "interfaces" that `cms-infra` implements.

mod cache;
mod chaos;

pub use cache::{Cache, CacheError, CacheStats};
pub use chaos::ChaosPolicy;
