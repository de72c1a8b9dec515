//! Output type for dry-streak queries.

use droprate_stats::format_percent;

/// Result of a dry-streak query.
///
/// `lucky_probability` is derived from `combined_dry_probability`, so the
/// two always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryStreakResult {
    dry_a: f64,
    dry_b: f64,
    combined_dry_probability: f64,
    total_attempts: u64,
}

impl DryStreakResult {
    pub(crate) fn new(dry_a: f64, dry_b: f64, total_attempts: u64) -> Self {
        Self {
            dry_a,
            dry_b,
            combined_dry_probability: dry_a * dry_b,
            total_attempts,
        }
    }

    /// Probability that both pools produced zero drops.
    pub fn combined_dry_probability(&self) -> f64 {
        self.combined_dry_probability
    }

    /// Probability of at least one drop across both pools.
    pub fn lucky_probability(&self) -> f64 {
        1.0 - self.combined_dry_probability
    }

    /// Dry probability of the first pool alone.
    pub fn dry_a(&self) -> f64 {
        self.dry_a
    }

    /// Dry probability of the second pool alone.
    pub fn dry_b(&self) -> f64 {
        self.dry_b
    }

    /// Attempts across both pools.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Combined dry probability as a percentage with 4 decimals.
    pub fn unlucky_percent(&self) -> String {
        format_percent(self.combined_dry_probability, 4)
    }

    /// Lucky probability as a percentage with 2 decimals.
    pub fn lucky_percent(&self) -> String {
        format_percent(self.lucky_probability(), 2)
    }
}
