//! Binomial "how unlucky am I" estimation.
//!
//! Given `n` attempts at a fixed per-attempt drop probability `p` and `k`
//! drops obtained, computes `P(X <= k)` for `X ~ Binomial(n, p)`: the share
//! of players who would have done no better. The CDF is summed in log-space
//! with a Stirling fallback for large factorials (see `droprate-stats`).
//!
//! # Quick start
//!
//! ```
//! use droprate_binomial::{BinomialQuery, estimate};
//!
//! // 1/3000 drop, 3000 attempts, no drops.
//! let query = BinomialQuery::from_drop_rate(3000, 3000, 0).unwrap();
//! let result = estimate(&query);
//!
//! assert_eq!(result.expected_display(), "1.00");
//! assert!((result.cumulative_probability() - 0.3678).abs() < 1e-3);
//! ```

mod cdf;
mod error;
mod query;
mod result;

pub use cdf::binomial_cdf;
pub use error::BinomialError;
pub use query::BinomialQuery;
pub use result::BinomialResult;

use tracing::debug;

/// Evaluates a binomial unluckiness query.
///
/// Returns the cumulative probability `P(X <= k)` and the expected number of
/// successes `n * p`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        n = query.trials(),
        k = query.observed_successes(),
        p = query.success_probability()
    )
)]
pub fn estimate(query: &BinomialQuery) -> BinomialResult {
    let cumulative = binomial_cdf(
        query.trials(),
        query.observed_successes(),
        query.success_probability(),
    );
    let expected = query.expected_successes();

    debug!(cumulative, expected, "binomial estimate");
    BinomialResult::new(cumulative, expected)
}
