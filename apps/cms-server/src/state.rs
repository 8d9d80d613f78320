//! Application state - shared across all handlers.

use std::sync::Arc;

use cms_core::ports::ChaosPolicy;
use cms_infra::cache::InMemoryCache;
use cms_infra::catalog::Catalog;
use cms_infra::chaos::{NoChaos, SimulatedChaos};
use cms_infra::service::ContentService;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
}

impl AppState {
    /// Build the state: seed the catalog and wire the service with the
    /// configured cache TTL and chaos policy.
    pub fn new(config: &AppConfig) -> Self {
        let chaos: Arc<dyn ChaosPolicy> =
            if config.fault_rate > 0.0 || !config.simulated_delay.is_zero() {
                tracing::info!(
                    delay_ms = config.simulated_delay.as_millis() as u64,
                    fault_rate = config.fault_rate,
                    "chaos policy enabled"
                );
                Arc::new(SimulatedChaos::new(config.simulated_delay, config.fault_rate))
            } else {
                Arc::new(NoChaos)
            };

        let content = ContentService::new(
            Catalog::seed(),
            Arc::new(InMemoryCache::new()),
            chaos,
            config.cache_ttl,
        );

        tracing::info!(ttl_secs = config.cache_ttl.as_secs(), "content service initialized");

        Self {
            content: Arc::new(content),
        }
    }
}
