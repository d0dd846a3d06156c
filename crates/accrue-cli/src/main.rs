//! Accrue CLI - compound-interest balance of a personal loan ledger.
//!
//! # Usage
//!
//! ```bash
//! # Net balance today at the configured rate
//! accrue balance --entries ledger.json
//!
//! # Balance one year after the first entry, 10% compounded daily
//! accrue balance --entries ledger.csv --preset 1y --rate 10 --frequency daily
//!
//! # Step-by-step calculation for entry 2
//! accrue explain --entries ledger.json --date 2024-01-01 --id 2
//!
//! # Effective annual rate for every compounding frequency
//! accrue rates --rate 10
//!
//! # Change the default rate
//! accrue config set rate 9.5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("accrue={level},accrue_engine={level},accrue_core={level}"))
    });

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = CliConfig::resolve_path(cli.config.as_deref())?;
    let config = CliConfig::load(&config_path)?;

    if cli.no_color || !config.use_colors {
        colored::control::set_override(false);
    }

    let ctx = Context {
        format: cli.format.unwrap_or(config.format),
        quiet: cli.quiet,
        config,
        config_path,
    };

    match cli.command {
        Commands::Balance(args) => commands::balance::execute(args, &ctx),
        Commands::Explain(args) => commands::explain::execute(args, &ctx),
        Commands::Rates(args) => commands::rates::execute(args, &ctx),
        Commands::Config(args) => commands::config::execute(args, &ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
