//! Dry-streak scenarios with the default search/destroy rates.

use approx::assert_abs_diff_eq;
use droprate_dry_streak::{AttemptPool, DryStreakConfig, estimate, estimate_attempts};

#[test]
fn searches_only_at_the_rate() {
    let r = estimate_attempts(3000, 0, &DryStreakConfig::new()).unwrap();

    assert_abs_diff_eq!(
        r.combined_dry_probability(),
        (1.0f64 - 1.0 / 3000.0).powf(3000.0),
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(r.combined_dry_probability(), 0.36756, epsilon = 5e-4);
    assert_eq!(r.unlucky_percent(), "36.7818");
    assert_eq!(r.lucky_percent(), "63.22");
    assert_eq!(r.total_attempts(), 3000);
}

#[test]
fn destroys_count_double() {
    // One destroy at 1/1500 is worth two searches at 1/3000.
    let cfg = DryStreakConfig::new();
    let destroys = estimate_attempts(0, 1500, &cfg).unwrap();
    let searches = estimate_attempts(3000, 0, &cfg).unwrap();
    assert_abs_diff_eq!(
        destroys.combined_dry_probability(),
        searches.combined_dry_probability(),
        epsilon = 1e-4
    );
}

#[test]
fn mixed_pools() {
    let r = estimate_attempts(1000, 500, &DryStreakConfig::new()).unwrap();
    assert_abs_diff_eq!(r.combined_dry_probability(), 0.513_331_5, epsilon = 1e-6);
    assert_eq!(r.total_attempts(), 1500);
}

#[test]
fn complement_sums_to_one() {
    let cfg = DryStreakConfig::new();
    for search in (0..20_000u64).step_by(997) {
        for destroy in (0..10_000u64).step_by(683) {
            let r = estimate_attempts(search, destroy, &cfg).unwrap();
            assert_eq!(
                r.lucky_probability() + r.combined_dry_probability(),
                1.0,
                "search={search} destroy={destroy}"
            );
        }
    }
}

#[test]
fn more_attempts_never_more_dry() {
    let cfg = DryStreakConfig::new();
    let mut prev = 1.0;
    for search in (0..50_000u64).step_by(1_000) {
        let dry = estimate_attempts(search, 100, &cfg)
            .unwrap()
            .combined_dry_probability();
        assert!(dry <= prev, "search={search}: {dry} > {prev}");
        prev = dry;
    }
}

#[test]
fn custom_rates() {
    let cfg = DryStreakConfig::new()
        .with_search_rate(2)
        .with_destroy_rate(4);
    let r = estimate_attempts(1, 1, &cfg).unwrap();
    // 1/2 * 3/4
    assert_abs_diff_eq!(r.combined_dry_probability(), 0.375, epsilon = 1e-15);
}

#[test]
fn pool_order_does_not_matter() {
    let a = AttemptPool::new(40, 0.01).unwrap();
    let b = AttemptPool::new(7, 0.2).unwrap();
    assert_eq!(
        estimate(a, b).combined_dry_probability(),
        estimate(b, a).combined_dry_probability()
    );
}

#[test]
fn exact_tie_rounds_up() {
    // (1/2)^7 = 0.78125% dry, shown to 4 decimals.
    let cfg = DryStreakConfig::new().with_search_rate(2);
    let r = estimate_attempts(7, 0, &cfg).unwrap();
    assert_eq!(r.combined_dry_probability(), 0.007_812_5);
    assert_eq!(r.unlucky_percent(), "0.7813");
    assert_eq!(r.lucky_percent(), "99.22");
}
