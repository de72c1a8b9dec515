//! Error types for the droprate-binomial crate.

/// Error type for the validated constructors in the droprate-binomial crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinomialError {
    /// Returned when the per-trial success probability is outside (0, 1].
    #[error("invalid success probability: {p} (must be in (0, 1])")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },

    /// Returned when a drop rate of `1/0` is requested.
    #[error("drop rate denominator must be at least 1")]
    ZeroDropRate,
}
