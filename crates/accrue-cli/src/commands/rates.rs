//! Rates command implementation.
//!
//! Shows how the compounding frequency changes the effective annual rate.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use accrue_core::CompoundingFrequency;
use accrue_engine::compounding::{effective_annual_rate, periodic_rate};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_percent, print_header, print_output};

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Nominal annual rate in percent. Defaults to the configured rate.
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

/// Effective rate for one frequency.
#[derive(Debug, Serialize, Tabled)]
struct RateRow {
    #[tabled(rename = "Frequency")]
    frequency: CompoundingFrequency,
    #[tabled(rename = "Compounds/Year")]
    compounds_per_year: u32,
    #[tabled(rename = "Periodic Rate", display_with = "display_percent_4")]
    periodic_rate: f64,
    #[tabled(rename = "Effective Annual Rate", display_with = "display_percent_3")]
    effective_annual_rate: f64,
}

fn display_percent_4(value: &f64) -> String {
    format_percent(*value, 4)
}

fn display_percent_3(value: &f64) -> String {
    format_percent(*value, 3)
}

fn rate_rows(annual_rate: f64) -> Vec<RateRow> {
    CompoundingFrequency::all()
        .iter()
        .map(|&frequency| RateRow {
            frequency,
            compounds_per_year: frequency.compounds_per_year(),
            periodic_rate: periodic_rate(annual_rate, frequency),
            effective_annual_rate: effective_annual_rate(annual_rate, frequency),
        })
        .collect()
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, ctx: &Context) -> Result<()> {
    let rate_percent = args.rate.unwrap_or(ctx.config.rate_percent);
    if !rate_percent.is_finite() {
        anyhow::bail!("Invalid rate: {rate_percent}");
    }
    let rows = rate_rows(rate_percent / 100.0);

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header(&format!("Effective annual rates at {rate_percent}% nominal"));
    }
    match ctx.format {
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}\t{:.6}", row.frequency.as_str(), row.effective_annual_rate);
            }
        }
        format => print_output(&rows, format)?,
    }
    Ok(())
}
