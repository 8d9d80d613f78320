//! Chaos policy implementations.
//!
//! A development deployment typically runs with ~100ms of latency and a 5%
//! fault rate to exercise loading and error states in the frontend; tests
//! and production-like runs use [`NoChaos`].

use rand::Rng;
use std::time::Duration;

use cms_core::ports::ChaosPolicy;

/// No latency, no faults. The default for tests and production-like runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChaos;

impl ChaosPolicy for NoChaos {}

/// Fixed latency plus random transient faults at a configured rate.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedChaos {
    delay: Duration,
    fault_rate: f64,
}

impl SimulatedChaos {
    /// `fault_rate` is clamped into `[0, 1]`.
    pub fn new(delay: Duration, fault_rate: f64) -> Self {
        Self {
            delay,
            fault_rate: fault_rate.clamp(0.0, 1.0),
        }
    }
}

impl ChaosPolicy for SimulatedChaos {
    fn delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        self.fault_rate > 0.0 && rand::thread_rng().gen_bool(self.fault_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_chaos_never_fails() {
        let policy = NoChaos;
        assert_eq!(policy.delay(), Duration::ZERO);
        assert!(!policy.should_fail());
    }

    #[test]
    fn fault_rate_extremes_are_deterministic() {
        let never = SimulatedChaos::new(Duration::ZERO, 0.0);
        let always = SimulatedChaos::new(Duration::ZERO, 7.5); // clamped to 1.0
        for _ in 0..50 {
            assert!(!never.should_fail());
            assert!(always.should_fail());
        }
    }
}
