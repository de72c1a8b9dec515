//! Form-style validation of raw field text.
//!
//! Every field is checked before any error is returned, so a caller can show
//! all problems at once. Values are parsed as floating point first, then
//! required to be whole, so `"3000.0"` and `"3e3"` both read as 3000. Only a
//! truly empty field counts as blank; whitespace alone is not a number.

use std::fmt;

pub const NON_NEGATIVE: &str = "Must be a non-negative number";
pub const POSITIVE: &str = "Must be a positive number";
pub const WHOLE_NUMBER: &str = "Must be a whole number";
pub const AT_LEAST_ONE_ATTEMPT: &str = "Enter at least one attempt";
pub const MISSING_DROP_RATE: &str = "Please enter a drop rate";
pub const MISSING_ATTEMPTS: &str = "Please enter number of attempts";
pub const TOO_MANY_DROPS: &str = "Must be at most 1,000,000";

/// Largest accepted drops-obtained value. The binomial CDF sums one term per
/// drop, so this bounds the work per query.
pub const MAX_DROPS: u64 = 1_000_000;

/// A message attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input: {}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Field errors in input order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for `field`, if it failed.
    #[cfg(test)]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

#[derive(Clone, Copy)]
enum Rule {
    /// Empty reads as 0; negatives are rejected.
    NonNegative,
    /// Must be present and greater than 0.
    Positive { missing: &'static str },
}

fn parse_field(raw: Option<&str>, rule: Rule) -> Result<u64, &'static str> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return match rule {
            Rule::NonNegative => Ok(0),
            Rule::Positive { missing } => Err(missing),
        };
    }

    let value: f64 = raw.trim().parse().unwrap_or(f64::NAN);
    match rule {
        Rule::NonNegative if value.is_nan() || value < 0.0 => return Err(NON_NEGATIVE),
        Rule::Positive { .. } if value.is_nan() || value <= 0.0 => return Err(POSITIVE),
        _ => {}
    }
    if value.fract() != 0.0 {
        return Err(WHOLE_NUMBER);
    }
    // Saturates above u64::MAX.
    Ok(value as u64)
}

/// Collects per-field results into values or a list of errors.
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn field(&mut self, field: &'static str, raw: Option<&str>, rule: Rule) -> Option<u64> {
        match parse_field(raw, rule) {
            Ok(v) => Some(v),
            Err(message) => {
                self.errors.push(FieldError { field, message });
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(v) if self.errors.is_empty() => Ok(v),
            _ => Err(ValidationErrors(self.errors)),
        }
    }
}

/// Validated dry-streak input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DryStreakInput {
    pub search_attempts: u64,
    pub destroy_attempts: u64,
}

/// Validates the search and destroy attempt fields.
///
/// Both may be empty (0), but not both zero.
pub fn dry_streak(
    search: Option<&str>,
    destroy: Option<&str>,
) -> Result<DryStreakInput, ValidationErrors> {
    let mut c = Collector::new();
    let search_attempts = c.field("search", search, Rule::NonNegative);
    let destroy_attempts = c.field("destroy", destroy, Rule::NonNegative);

    let input = match (search_attempts, destroy_attempts) {
        (Some(0), Some(0)) => {
            c.errors.push(FieldError {
                field: "search",
                message: AT_LEAST_ONE_ATTEMPT,
            });
            None
        }
        (Some(search_attempts), Some(destroy_attempts)) => Some(DryStreakInput {
            search_attempts,
            destroy_attempts,
        }),
        _ => None,
    };
    c.finish(input)
}

/// Validated binomial input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialInput {
    pub drop_rate: u64,
    pub attempts: u64,
    pub drops: u64,
}

/// Validates the drop rate, attempts and drops-obtained fields.
pub fn binomial(
    drop_rate: Option<&str>,
    attempts: Option<&str>,
    drops: Option<&str>,
) -> Result<BinomialInput, ValidationErrors> {
    let mut c = Collector::new();
    let drop_rate = c.field(
        "drop-rate",
        drop_rate,
        Rule::Positive {
            missing: MISSING_DROP_RATE,
        },
    );
    let attempts = c.field(
        "attempts",
        attempts,
        Rule::Positive {
            missing: MISSING_ATTEMPTS,
        },
    );
    let drops = match c.field("drops", drops, Rule::NonNegative) {
        Some(d) if d > MAX_DROPS => {
            c.errors.push(FieldError {
                field: "drops",
                message: TOO_MANY_DROPS,
            });
            None
        }
        other => other,
    };

    let input = match (drop_rate, attempts, drops) {
        (Some(drop_rate), Some(attempts), Some(drops)) => Some(BinomialInput {
            drop_rate,
            attempts,
            drops,
        }),
        _ => None,
    };
    c.finish(input)
}
