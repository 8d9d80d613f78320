use std::time::Duration;

/// Fault and latency injection for the mock upstream.
///
/// Applied on every cache miss, before the result is computed. Defaults
/// are the no-op policy.
pub trait ChaosPolicy: Send + Sync {
    /// Simulated upstream latency applied before computing a result.
    fn delay(&self) -> Duration {
        Duration::ZERO
    }

    /// Whether this fetch should fail with a transient error.
    fn should_fail(&self) -> bool {
        false
    }
}
