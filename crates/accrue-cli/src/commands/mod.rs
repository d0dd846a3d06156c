//! CLI command implementations.

pub mod balance;
pub mod config;
pub mod explain;
pub mod rates;

pub use balance::BalanceArgs;
pub use config::ConfigArgs;
pub use explain::ExplainArgs;
pub use rates::RatesArgs;

use std::path::PathBuf;

use accrue_core::{CompoundingFrequency, Date};
use accrue_engine::{BalanceDatePreset, CompoundingConfig, Ledger, Validate};
use clap::Args;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::load_ledger;

/// Settings shared by every command.
pub struct Context {
    /// Effective output format.
    pub format: OutputFormat,
    /// Skip headers and informational lines.
    pub quiet: bool,
    /// Loaded defaults.
    pub config: CliConfig,
    /// Where the defaults were loaded from.
    pub config_path: PathBuf,
}

/// Inputs shared by the commands that evaluate a ledger.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Entry file (.json or .csv)
    #[arg(short, long)]
    pub entries: PathBuf,

    /// Balance date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, conflicts_with = "preset")]
    pub date: Option<Date>,

    /// Balance date shortcut: today, 1m, 1y, 5y (offsets from the earliest entry)
    #[arg(short, long)]
    pub preset: Option<BalanceDatePreset>,

    /// Annual interest rate in percent (e.g. 11 for 11%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Compounding frequency: daily, weekly, monthly, yearly
    #[arg(short = 'c', long)]
    pub frequency: Option<CompoundingFrequency>,

    /// Overrides the current date
    #[arg(long, env = "ACCRUE_TODAY", hide = true)]
    pub today: Option<Date>,
}

impl CalcArgs {
    /// Loads the ledger and builds a validated calculation config.
    ///
    /// Flags win over config-file defaults.
    pub fn resolve(&self, defaults: &CliConfig) -> CliResult<(Ledger, CompoundingConfig)> {
        let today = self.today.unwrap_or_else(Date::today);
        let ledger = load_ledger(&self.entries, today)?;

        let balance_date = match (self.date, self.preset) {
            (Some(date), _) => date,
            (None, Some(preset)) => ledger.balance_date_for(preset, today)?,
            (None, None) => today,
        };

        let config = CompoundingConfig::from_percent(
            balance_date,
            self.rate.unwrap_or(defaults.rate_percent),
            self.frequency.unwrap_or(defaults.frequency),
        );
        config.validate_or_error()?;

        tracing::debug!(
            balance_date = %config.balance_date,
            rate = config.annual_rate,
            frequency = %config.frequency,
            "resolved calculation parameters"
        );
        Ok((ledger, config))
    }
}
