//! Text and JSON renderings of estimator results.

use serde::Serialize;

use droprate_binomial::BinomialResult;
use droprate_dry_streak::DryStreakResult;

use crate::config::DryStreakToml;
use crate::validate::{BinomialInput, DryStreakInput};

/// Formats an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Renders the dry-streak result as lines of text.
pub fn dry_streak_text(
    input: &DryStreakInput,
    result: &DryStreakResult,
    labels: &DryStreakToml,
) -> String {
    let mut out = String::from("Results\n");
    out.push_str(&format!(
        "With {} {} and {} {} ({} total):\n",
        group_thousands(input.search_attempts),
        labels.search_label,
        group_thousands(input.destroy_attempts),
        labels.destroy_label,
        group_thousands(result.total_attempts()),
    ));
    out.push_str(&format!(
        "Only {}% of players would be as unlucky as you.\n",
        result.unlucky_percent()
    ));
    out.push_str(&format!(
        "{}% of players would have received the {} by now.\n",
        result.lucky_percent(),
        labels.reward
    ));
    out
}

/// Renders the binomial result as lines of text.
pub fn binomial_text(input: &BinomialInput, result: &BinomialResult) -> String {
    let mut out = String::from("Results\n");
    out.push_str(&format!(
        "With a 1/{} drop rate over {} attempts",
        input.drop_rate,
        group_thousands(input.attempts)
    ));
    if input.drops > 0 {
        out.push_str(&format!(
            " with {} {} obtained:\n",
            input.drops,
            plural(input.drops, "drop")
        ));
    } else {
        out.push_str(" with no drops:\n");
    }
    out.push_str(&format!("Expected drops: {}\n", result.expected_display()));
    out.push_str(&format!(
        "Only {}% of players would be as unlucky as you.\n",
        result.unlucky_percent()
    ));
    out.push_str(&format!(
        "{}% of players would have more than {} {} by now.\n",
        result.luckier_percent(),
        input.drops,
        plural(input.drops, "drop")
    ));
    out
}

/// JSON form of a dry-streak run.
#[derive(Debug, Serialize)]
pub struct DryStreakReport {
    pub search_attempts: u64,
    pub destroy_attempts: u64,
    pub total_attempts: u64,
    pub search_rate: u64,
    pub destroy_rate: u64,
    pub combined_dry_probability: f64,
    pub lucky_probability: f64,
    pub unlucky_percent: String,
    pub lucky_percent: String,
}

impl DryStreakReport {
    pub fn new(
        input: &DryStreakInput,
        result: &DryStreakResult,
        search_rate: u64,
        destroy_rate: u64,
    ) -> Self {
        Self {
            search_attempts: input.search_attempts,
            destroy_attempts: input.destroy_attempts,
            total_attempts: result.total_attempts(),
            search_rate,
            destroy_rate,
            combined_dry_probability: result.combined_dry_probability(),
            lucky_probability: result.lucky_probability(),
            unlucky_percent: result.unlucky_percent(),
            lucky_percent: result.lucky_percent(),
        }
    }
}

/// JSON form of a binomial run.
#[derive(Debug, Serialize)]
pub struct BinomialReport {
    pub drop_rate: u64,
    pub attempts: u64,
    pub drops: u64,
    pub expected_drops: f64,
    pub cumulative_probability: f64,
    pub unlucky_percent: String,
    pub luckier_percent: String,
}

impl BinomialReport {
    pub fn new(input: &BinomialInput, result: &BinomialResult) -> Self {
        Self {
            drop_rate: input.drop_rate,
            attempts: input.attempts,
            drops: input.drops,
            expected_drops: result.expected_value(),
            cumulative_probability: result.cumulative_probability(),
            unlucky_percent: result.unlucky_percent(),
            luckier_percent: result.luckier_percent(),
        }
    }
}
