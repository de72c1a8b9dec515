//! Numeric helpers shared by the droprate estimators.
//!
//! Factorials overflow `f64` past 170!, so the combinatorics here work with
//! natural logarithms. Small arguments are summed exactly; large arguments
//! fall back to Stirling's approximation.

use std::f64::consts::PI;

/// Smallest `n` for which [`log_factorial`] switches to Stirling's
/// approximation. Below it, `ln(n!)` is an exact sum of logarithms.
pub const STIRLING_THRESHOLD: u64 = 20;

/// Natural log of `n!`.
///
/// - `n <= 1`: exactly `0.0`.
/// - `1 < n < 20`: `ln 2 + ln 3 + ... + ln n`.
/// - `n >= 20`: Stirling, `n ln n - n + 0.5 ln(2 pi n)`.
pub fn log_factorial(n: u64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    if n < STIRLING_THRESHOLD {
        return (2..=n).map(|i| (i as f64).ln()).sum();
    }
    stirling(n as f64)
}

fn stirling(n: f64) -> f64 {
    n * n.ln() - n + 0.5 * (2.0 * PI * n).ln()
}

/// Natural log of the binomial coefficient `C(n, k)`.
///
/// Returns exactly `0.0` for `k == 0` and `k == n` rather than the
/// near-zero residue of subtracting log-factorials.
///
/// # Panics
///
/// Panics if `k > n`.
pub fn log_choose(n: u64, k: u64) -> f64 {
    assert!(k <= n, "log_choose: k ({k}) must not exceed n ({n})");
    if k == 0 || k == n {
        return 0.0;
    }
    log_factorial(n) - log_factorial(k) - log_factorial(n - k)
}

/// Fractional digits in the longest exact decimal expansion of an `f64`
/// (the smallest subnormal, 2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with `decimals` fractional digits, rounding exact ties
/// away from zero.
///
/// `format!("{:.2}")` rounds ties to even, so `0.125` becomes `"0.12"`;
/// this gives `"0.13"`. Rounding is decided on the exact binary value, so
/// `1.005` (really `1.00499999...`) still gives `"1.00"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = decimals.min(frac_part.len());

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..kept].bytes())
        .collect();
    digits.resize(int_part.len() + decimals, b'0');

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}

/// Formats a probability in `[0, 1]` as a percentage with `decimals`
/// fractional digits, without the `%` sign.
///
/// `format_percent(0.3678, 2)` gives `"36.78"`.
pub fn format_percent(probability: f64, decimals: usize) -> String {
    format_fixed(probability * 100.0, decimals)
}
