//! Binomial command: chance of having at most this many drops.

use anyhow::Result;
use tracing::{info, info_span};

use droprate_binomial::{BinomialQuery, estimate};

use crate::cli::BinomialArgs;
use crate::report::{self, BinomialReport};
use crate::validate;

/// Run the binomial calculator and print the report.
pub fn run(args: BinomialArgs) -> Result<()> {
    print!("{}", render(&args)?);
    Ok(())
}

/// Validate, estimate and render without printing.
pub fn render(args: &BinomialArgs) -> Result<String> {
    let _cmd = info_span!("binomial").entered();

    let input = validate::binomial(
        args.drop_rate.as_deref(),
        args.attempts.as_deref(),
        args.drops.as_deref(),
    )?;
    info!(
        drop_rate = input.drop_rate,
        attempts = input.attempts,
        drops = input.drops,
        "estimating binomial unluckiness"
    );

    let query = BinomialQuery::from_drop_rate(input.drop_rate, input.attempts, input.drops)?;
    let result = estimate(&query);

    if args.json {
        let report = BinomialReport::new(&input, &result);
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(report::binomial_text(&input, &result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{MISSING_ATTEMPTS, ValidationErrors};

    fn args(rate: Option<&str>, attempts: Option<&str>, drops: Option<&str>) -> BinomialArgs {
        BinomialArgs {
            drop_rate: rate.map(String::from),
            attempts: attempts.map(String::from),
            drops: drops.map(String::from),
            json: false,
        }
    }

    #[test]
    fn text_output() {
        let out = render(&args(Some("3000"), Some("3000"), None)).unwrap();
        assert!(out.contains("With a 1/3000 drop rate over 3,000 attempts with no drops:"));
        assert!(out.contains("Expected drops: 1.00"));
        assert!(out.contains("Only 36.7818% of players would be as unlucky as you."));
        assert!(out.contains("63.22% of players would have more than 0 drops by now."));
    }

    #[test]
    fn json_output() {
        let mut a = args(Some("3000"), Some("6000"), Some("1"));
        a.json = true;
        let value: serde_json::Value = serde_json::from_str(&render(&a).unwrap()).unwrap();
        assert_eq!(value["drops"], 1);
        let expected = value["expected_drops"].as_f64().unwrap();
        assert!((expected - 2.0).abs() < 1e-9);
        let cumulative = value["cumulative_probability"].as_f64().unwrap();
        assert!((cumulative - 0.405_960_7).abs() < 1e-6);
    }

    #[test]
    fn missing_attempts() {
        let err = render(&args(Some("10"), None, None)).unwrap_err();
        let errors = err.downcast_ref::<ValidationErrors>().unwrap();
        assert_eq!(errors.message_for("attempts"), Some(MISSING_ATTEMPTS));
    }
}
