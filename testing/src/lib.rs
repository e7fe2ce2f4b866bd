//! # Churnboard Testing
//!
//! Testing utilities and helpers for the Churnboard architecture.
//!
//! This crate provides:
//! - The [`ReducerTest`] Given-When-Then harness for pure reducer tests
//! - Assertion helpers for effects (including cancellable effects)
//! - A fixed test clock
//!
//! ## Example
//!
//! ```ignore
//! use churnboard_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(DashboardReducer)
//!     .with_env(test_environment())
//!     .given_state(DashboardState::default())
//!     .when_action(DashboardAction::StopPolling)
//!     .then_state(|state| assert!(!state.polling))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use churnboard_core::environment::FixedClock;


/// Mock implementations for testing
pub mod mocks {
    use super::{DateTime, FixedClock, Utc};

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::test_clock;
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use churnboard_core::environment::Clock;

    #[test]
    fn fixed_clock_is_deterministic() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
