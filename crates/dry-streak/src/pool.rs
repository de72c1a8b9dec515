//! A run of attempts at one fixed drop probability.

use crate::error::DryStreakError;

/// A number of attempts made at a single per-attempt drop probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptPool {
    attempts: u64,
    probability: f64,
}

impl AttemptPool {
    /// Creates a pool after checking that `probability` is finite and in
    /// (0, 1].
    pub fn new(attempts: u64, probability: f64) -> Result<Self, DryStreakError> {
        if !probability.is_finite() || probability <= 0.0 || probability > 1.0 {
            return Err(DryStreakError::InvalidProbability { p: probability });
        }
        Ok(Self {
            attempts,
            probability,
        })
    }

    /// Creates a pool of `attempts` at a `1/rate` drop probability.
    pub fn from_rate(attempts: u64, rate: u64) -> Result<Self, DryStreakError> {
        if rate == 0 {
            return Err(DryStreakError::ZeroRate);
        }
        Self::new(attempts, 1.0 / rate as f64)
    }

    /// Number of attempts.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Per-attempt drop probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Probability that every attempt in this pool missed.
    ///
    /// An empty pool is vacuously dry and contributes exactly `1.0`.
    pub fn dry_probability(&self) -> f64 {
        if self.attempts == 0 {
            return 1.0;
        }
        (1.0 - self.probability).powf(self.attempts as f64)
    }
}
