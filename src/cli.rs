use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drop-luck calculators.
#[derive(Parser, Debug)]
#[command(
    name = "droprate",
    version,
    about = "How unlucky are you with a random drop?"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./droprate.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chance of still having no drop after searches and destroys.
    DryStreak(DryStreakArgs),
    /// Chance of having at most this many drops after N attempts.
    Binomial(BinomialArgs),
}

/// Arguments for the `dry-streak` subcommand.
///
/// Fields are taken as raw text and validated by [`crate::validate`] so that
/// every bad field gets its own message.
#[derive(clap::Args, Debug)]
pub struct DryStreakArgs {
    /// Number of search attempts (empty = 0).
    #[arg(short, long, allow_hyphen_values = true)]
    pub search: Option<String>,

    /// Number of destroy attempts (empty = 0).
    #[arg(short, long, allow_hyphen_values = true)]
    pub destroy: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `binomial` subcommand.
#[derive(clap::Args, Debug)]
pub struct BinomialArgs {
    /// Drop rate denominator N, for a 1/N drop.
    #[arg(short = 'r', long = "drop-rate", allow_hyphen_values = true)]
    pub drop_rate: Option<String>,

    /// Number of attempts.
    #[arg(short, long, allow_hyphen_values = true)]
    pub attempts: Option<String>,

    /// Number of drops obtained (empty = 0).
    #[arg(long, allow_hyphen_values = true)]
    pub drops: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}
