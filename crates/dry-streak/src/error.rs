//! Error types for the droprate-dry-streak crate.

/// Error type for all fallible operations in the droprate-dry-streak crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DryStreakError {
    /// Returned when a per-attempt probability is outside (0, 1].
    #[error("invalid per-attempt probability: {p} (must be in (0, 1])")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },

    /// Returned when a `1/0` rate is requested.
    #[error("rate denominator must be at least 1")]
    ZeroRate,

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_probability() {
        let e = DryStreakError::InvalidProbability { p: 0.0 };
        assert_eq!(
            e.to_string(),
            "invalid per-attempt probability: 0 (must be in (0, 1])"
        );
    }

    #[test]
    fn error_zero_rate() {
        assert_eq!(
            DryStreakError::ZeroRate.to_string(),
            "rate denominator must be at least 1"
        );
    }

    #[test]
    fn error_invalid_config() {
        let e = DryStreakError::InvalidConfig {
            reason: "search_rate must be >= 1, got 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: search_rate must be >= 1, got 0"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DryStreakError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DryStreakError>();
    }
}
