mod binomial_cmd;
mod cli;
mod config;
mod dry_streak_cmd;
mod logging;
mod report;
mod validate;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::DroprateConfig;
use crate::validate::ValidationErrors;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ValidationErrors>() {
            Some(errors) => {
                for field in errors.iter() {
                    eprintln!("Error: {field}");
                }
            }
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::DryStreak(args) => {
            let config = DroprateConfig::load(cli.config.as_deref())?;
            dry_streak_cmd::run(args, &config)
        }
        Command::Binomial(args) => binomial_cmd::run(args),
    }
}
