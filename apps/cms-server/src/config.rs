//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use cms_infra::service::DEFAULT_TTL;

/// Application configuration. Every value has a default, so the server runs
/// with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Freshness window for cached query results.
    pub cache_ttl: Duration,
    /// Simulated upstream latency applied on cache misses.
    pub simulated_delay: Duration,
    /// Probability in `[0, 1]` that a fetch fails with a transient error.
    pub fault_rate: f64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
            simulated_delay: env::var("SIMULATED_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::ZERO),
            fault_rate: env::var("FAULT_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0),
        }
    }
}
