//! Input type for binomial unluckiness queries.

use crate::error::BinomialError;

/// A binomial unluckiness query: `n` attempts at probability `p`, of which
/// `k` succeeded.
///
/// `k` is signed so that "fewer than zero drops" can be asked and answered
/// (with probability 0) without a special case at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialQuery {
    trials: u64,
    observed_successes: i64,
    success_probability: f64,
    drop_rate: Option<u64>,
}

impl BinomialQuery {
    /// Creates a query after checking that `p` is finite and in (0, 1].
    pub fn new(trials: u64, observed_successes: i64, p: f64) -> Result<Self, BinomialError> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(BinomialError::InvalidProbability { p });
        }
        Ok(Self {
            trials,
            observed_successes,
            success_probability: p,
            drop_rate: None,
        })
    }

    /// Creates a query for a `1/drop_rate` drop over `attempts` attempts
    /// with `drops` drops obtained.
    pub fn from_drop_rate(
        drop_rate: u64,
        attempts: u64,
        drops: u64,
    ) -> Result<Self, BinomialError> {
        if drop_rate == 0 {
            return Err(BinomialError::ZeroDropRate);
        }
        let drops = i64::try_from(drops).unwrap_or(i64::MAX);
        let mut query = Self::new(attempts, drops, 1.0 / drop_rate as f64)?;
        query.drop_rate = Some(drop_rate);
        Ok(query)
    }

    /// Number of independent attempts `n`.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of successes observed `k`.
    pub fn observed_successes(&self) -> i64 {
        self.observed_successes
    }

    /// Per-attempt success probability `p`.
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Expected successes, `n * p`.
    ///
    /// For a `1/N` drop rate this is `n / N`, which stays exact where
    /// `n * (1/N)` would pick up the rounding of `1/N`.
    pub fn expected_successes(&self) -> f64 {
        match self.drop_rate {
            Some(rate) => self.trials as f64 / rate as f64,
            None => self.trials as f64 * self.success_probability,
        }
    }
}
