//! Binomial cumulative distribution function summed in log-space.

use droprate_stats::log_choose;

/// `P(X <= k)` for `X ~ Binomial(n, p)`.
///
/// Each term `C(n, i) p^i (1-p)^(n-i)` is built as a sum of logarithms and
/// exponentiated only at the end, so tiny per-term probabilities underflow
/// to zero gracefully instead of the coefficient overflowing first.
///
/// - `k < 0` returns `0.0`.
/// - `k >= n` returns `1.0` (this covers `n == 0`).
/// - The sum is clamped to `1.0` to absorb log/exp round-off.
///
/// Cost is `O(min(k, n))` terms; callers facing untrusted input should
/// bound `k`.
///
/// `p` is expected to lie in (0, 1]; see [`BinomialQuery::new`] for a
/// validated entry point.
///
/// [`BinomialQuery::new`]: crate::BinomialQuery::new
pub fn binomial_cdf(n: u64, k: i64, p: f64) -> f64 {
    if k < 0 {
        return 0.0;
    }
    let k = k as u64;
    if k >= n {
        return 1.0;
    }

    let log_p = p.ln();
    let log_q = (1.0 - p).ln();

    let sum: f64 = (0..=k)
        .map(|i| (log_choose(n, i) + i as f64 * log_p + (n - i) as f64 * log_q).exp())
        .sum();

    sum.min(1.0)
}
