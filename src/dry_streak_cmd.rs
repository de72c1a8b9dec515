//! Dry-streak command: chance of still having no drop.

use anyhow::Result;
use tracing::{info, info_span};

use droprate_dry_streak::estimate_attempts;

use crate::cli::DryStreakArgs;
use crate::config::DroprateConfig;
use crate::report::{self, DryStreakReport};
use crate::validate;

/// Run the dry-streak calculator and print the report.
pub fn run(args: DryStreakArgs, config: &DroprateConfig) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

/// Validate, estimate and render without printing.
pub fn render(args: &DryStreakArgs, config: &DroprateConfig) -> Result<String> {
    let _cmd = info_span!("dry-streak").entered();

    let input = validate::dry_streak(args.search.as_deref(), args.destroy.as_deref())?;
    let rates = config.dry_streak.to_config()?;
    info!(
        search = input.search_attempts,
        destroy = input.destroy_attempts,
        search_rate = rates.search_rate(),
        destroy_rate = rates.destroy_rate(),
        "estimating dry streak"
    );

    let result = estimate_attempts(input.search_attempts, input.destroy_attempts, &rates)?;

    if args.json {
        let report = DryStreakReport::new(
            &input,
            &result,
            rates.search_rate(),
            rates.destroy_rate(),
        );
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(report::dry_streak_text(&input, &result, &config.dry_streak))
    }
}
