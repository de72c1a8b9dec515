//! Dry-streak estimation across two independent attempt pools.
//!
//! Each pool is a number of attempts at its own fixed per-attempt drop
//! probability. The probability of having gone dry in both is the product
//! of `(1 - p)^attempts` over the pools; its complement is the share of
//! players who would have the drop by now.
//!
//! # Quick start
//!
//! ```
//! use droprate_dry_streak::{DryStreakConfig, estimate_attempts};
//!
//! // 3000 searches at 1/3000, no destroys.
//! let result = estimate_attempts(3000, 0, &DryStreakConfig::new()).unwrap();
//! assert_eq!(result.lucky_percent(), "63.22");
//! ```

mod config;
mod error;
mod pool;
mod result;

pub use config::{DESTROY_RATE, DryStreakConfig, SEARCH_RATE};
pub use error::DryStreakError;
pub use pool::AttemptPool;
pub use result::DryStreakResult;

use tracing::debug;

/// Probability that both pools independently produced zero drops.
///
/// Pools with no attempts contribute a factor of exactly `1.0`. When both
/// pools are empty the result is the degenerate `combined_dry = 1`; callers
/// that want to reject that case must do so before calling.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(a = pool_a.attempts(), b = pool_b.attempts())
)]
pub fn estimate(pool_a: AttemptPool, pool_b: AttemptPool) -> DryStreakResult {
    let dry_a = pool_a.dry_probability();
    let dry_b = pool_b.dry_probability();
    let total = pool_a.attempts().saturating_add(pool_b.attempts());

    let result = DryStreakResult::new(dry_a, dry_b, total);
    debug!(
        dry_a,
        dry_b,
        combined = result.combined_dry_probability(),
        "dry-streak estimate"
    );
    result
}

/// Builds the search and destroy pools from `config` and estimates them.
///
/// # Errors
///
/// Returns [`DryStreakError::InvalidConfig`] if either configured rate is 0.
pub fn estimate_attempts(
    search_attempts: u64,
    destroy_attempts: u64,
    config: &DryStreakConfig,
) -> Result<DryStreakResult, DryStreakError> {
    let (search, destroy) = config.pools(search_attempts, destroy_attempts)?;
    Ok(estimate(search, destroy))
}
