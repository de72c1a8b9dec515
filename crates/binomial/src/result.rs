//! Output type for binomial unluckiness queries.

use droprate_stats::{format_fixed, format_percent};

/// Result of a binomial unluckiness query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialResult {
    /// `P(X <= k)`, clamped to `[0, 1]`.
    cumulative_probability: f64,
    /// `n * p`.
    expected_value: f64,
}

impl BinomialResult {
    pub(crate) fn new(cumulative_probability: f64, expected_value: f64) -> Self {
        Self {
            cumulative_probability,
            expected_value,
        }
    }

    /// Probability of doing at most as well as observed: the share of
    /// players exactly as unlucky or unluckier.
    pub fn cumulative_probability(&self) -> f64 {
        self.cumulative_probability
    }

    /// Expected number of successes, `n * p`.
    pub fn expected_value(&self) -> f64 {
        self.expected_value
    }

    /// Share of players with strictly more successes, `1 - P(X <= k)`.
    pub fn luckier_probability(&self) -> f64 {
        1.0 - self.cumulative_probability
    }

    /// Cumulative probability as a percentage with 4 decimals.
    pub fn unlucky_percent(&self) -> String {
        format_percent(self.cumulative_probability, 4)
    }

    /// Complementary probability as a percentage with 2 decimals.
    pub fn luckier_percent(&self) -> String {
        format_percent(self.luckier_probability(), 2)
    }

    /// Expected successes with 2 decimals.
    pub fn expected_display(&self) -> String {
        format_fixed(self.expected_value, 2)
    }
}
