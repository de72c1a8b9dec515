//! Drop rates for the two attempt pools.

use crate::error::DryStreakError;
use crate::pool::AttemptPool;

/// Default `1/N` denominator for search attempts.
pub const SEARCH_RATE: u64 = 3000;

/// Default `1/N` denominator for destroy attempts.
pub const DESTROY_RATE: u64 = 1500;

/// Rates for the two independent attempt pools of a dry-streak query.
///
/// Each rate is the denominator `N` of a `1/N` per-attempt drop chance.
///
/// # Example
///
/// ```
/// use droprate_dry_streak::DryStreakConfig;
///
/// let config = DryStreakConfig::new()
///     .with_search_rate(4000)
///     .with_destroy_rate(2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DryStreakConfig {
    search_rate: u64,
    destroy_rate: u64,
}

impl DryStreakConfig {
    /// Creates a configuration with [`SEARCH_RATE`] and [`DESTROY_RATE`].
    pub fn new() -> Self {
        Self {
            search_rate: SEARCH_RATE,
            destroy_rate: DESTROY_RATE,
        }
    }

    /// Sets the search-pool rate denominator.
    pub fn with_search_rate(mut self, rate: u64) -> Self {
        self.search_rate = rate;
        self
    }

    /// Sets the destroy-pool rate denominator.
    pub fn with_destroy_rate(mut self, rate: u64) -> Self {
        self.destroy_rate = rate;
        self
    }

    /// Returns the search-pool rate denominator.
    pub fn search_rate(&self) -> u64 {
        self.search_rate
    }

    /// Returns the destroy-pool rate denominator.
    pub fn destroy_rate(&self) -> u64 {
        self.destroy_rate
    }

    /// Validates this configuration.
    ///
    /// Both rates must be at least 1.
    pub fn validate(&self) -> Result<(), DryStreakError> {
        if self.search_rate < 1 {
            return Err(DryStreakError::InvalidConfig {
                reason: format!("search_rate must be >= 1, got {}", self.search_rate),
            });
        }
        if self.destroy_rate < 1 {
            return Err(DryStreakError::InvalidConfig {
                reason: format!("destroy_rate must be >= 1, got {}", self.destroy_rate),
            });
        }
        Ok(())
    }

    /// Builds the search and destroy pools for the given attempt counts.
    pub fn pools(
        &self,
        search_attempts: u64,
        destroy_attempts: u64,
    ) -> Result<(AttemptPool, AttemptPool), DryStreakError> {
        self.validate()?;
        Ok((
            AttemptPool::from_rate(search_attempts, self.search_rate)?,
            AttemptPool::from_rate(destroy_attempts, self.destroy_rate)?,
        ))
    }
}

impl Default for DryStreakConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let cfg = DryStreakConfig::new();
        assert_eq!(cfg.search_rate(), 3000);
        assert_eq!(cfg.destroy_rate(), 1500);
        assert_eq!(cfg, DryStreakConfig::default());
    }

    #[test]
    fn builder_chaining() {
        let cfg = DryStreakConfig::new()
            .with_search_rate(100)
            .with_destroy_rate(50);
        assert_eq!(cfg.search_rate(), 100);
        assert_eq!(cfg.destroy_rate(), 50);
    }

    #[test]
    fn validate_ok() {
        assert!(DryStreakConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_zero_rates() {
        assert!(matches!(
            DryStreakConfig::new().with_search_rate(0).validate(),
            Err(DryStreakError::InvalidConfig { .. })
        ));
        assert!(matches!(
            DryStreakConfig::new().with_destroy_rate(0).validate(),
            Err(DryStreakError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn pools_use_configured_rates() {
        let (search, destroy) = DryStreakConfig::new().pools(7, 9).unwrap();
        assert_eq!(search.attempts(), 7);
        assert_eq!(destroy.attempts(), 9);
        assert_relative_eq!(search.probability(), 1.0 / 3000.0);
        assert_relative_eq!(destroy.probability(), 1.0 / 1500.0);
    }

    #[test]
    fn pools_reject_invalid_config() {
        assert!(
            DryStreakConfig::new()
                .with_destroy_rate(0)
                .pools(1, 1)
                .is_err()
        );
    }
}
