//! End-to-end drop-table scenarios.

use approx::assert_abs_diff_eq;
use droprate_binomial::{BinomialQuery, estimate};

#[test]
fn one_over_rate_for_rate_attempts_no_drops() {
    let q = BinomialQuery::from_drop_rate(3000, 3000, 0).unwrap();
    let r = estimate(&q);

    assert_eq!(r.expected_display(), "1.00");
    // Approaches 1/e as the rate grows.
    assert_abs_diff_eq!(r.cumulative_probability(), (-1.0f64).exp(), epsilon = 1e-4);
    assert_abs_diff_eq!(r.cumulative_probability(), 0.367_818_1, epsilon = 1e-6);
    assert_eq!(r.unlucky_percent(), "36.7818");
    assert_eq!(r.luckier_percent(), "63.22");
}

#[test]
fn one_drop_at_double_rate() {
    let q = BinomialQuery::from_drop_rate(3000, 6000, 1).unwrap();
    let r = estimate(&q);

    assert_eq!(r.expected_display(), "2.00");
    assert_abs_diff_eq!(r.cumulative_probability(), 0.405_960_7, epsilon = 1e-6);
}

#[test]
fn full_house_is_certain() {
    let q = BinomialQuery::new(100, 100, 0.5).unwrap();
    assert_eq!(estimate(&q).cumulative_probability(), 1.0);
}

#[test]
fn more_drops_than_attempts_is_certain() {
    let q = BinomialQuery::from_drop_rate(10, 5, 9).unwrap();
    let r = estimate(&q);
    assert_eq!(r.cumulative_probability(), 1.0);
    assert_eq!(r.unlucky_percent(), "100.0000");
    assert_eq!(r.luckier_percent(), "0.00");
}

#[test]
fn guaranteed_drop_with_none_obtained() {
    let q = BinomialQuery::from_drop_rate(1, 10, 0).unwrap();
    let r = estimate(&q);
    assert_eq!(r.cumulative_probability(), 0.0);
    assert_eq!(r.expected_display(), "10.00");
}

#[test]
fn one_attempt_at_one_in_eight() {
    let q = BinomialQuery::from_drop_rate(8, 1, 0).unwrap();
    let r = estimate(&q);
    assert_eq!(r.expected_display(), "0.13");
    assert_abs_diff_eq!(r.cumulative_probability(), 0.875, epsilon = 1e-12);
}
