//! Explain command implementation.
//!
//! Prints the step-by-step calculation behind each entry's value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use accrue_core::daycounts::DAYS_PER_YEAR;
use accrue_core::EntryId;
use accrue_engine::EntryResult;

use crate::cli::OutputFormat;
use crate::commands::{CalcArgs, Context};
use crate::error::CliError;
use crate::output::{
    format_currency, format_percent, print_csv, print_header, print_json, print_output,
};

/// Arguments for the explain command.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub calc: CalcArgs,

    /// Only explain the entry with this id (records are numbered from 1 in file order)
    #[arg(long)]
    pub id: Option<u64>,
}

/// One calculation step.
#[derive(Debug, Serialize, Tabled)]
struct StepRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Calculation")]
    calculation: String,
}

impl StepRow {
    fn new(metric: &'static str, value: String, calculation: String) -> Self {
        Self {
            metric,
            value,
            calculation,
        }
    }
}

/// CSV record: one line per entry with every intermediate value.
#[derive(Debug, Serialize)]
struct CsvRow {
    id: u64,
    date: String,
    kind: &'static str,
    days_elapsed: i64,
    years_elapsed: f64,
    compounds_per_year: u32,
    compound_periods: f64,
    periodic_rate: f64,
    effective_annual_rate: f64,
    growth_factor: f64,
    future_value: f64,
}

fn steps(result: &EntryResult<'_>, annual_rate: f64, symbol: &str) -> Vec<StepRow> {
    let entry = result.entry;
    vec![
        StepRow::new(
            "Days Elapsed",
            result.days_elapsed.to_string(),
            format!("{} through end of balance date", entry.date()),
        ),
        StepRow::new(
            "Years Elapsed",
            format!("{:.4}", result.years_elapsed),
            format!("{} / {DAYS_PER_YEAR}", result.days_elapsed),
        ),
        StepRow::new(
            "Compounds per Year",
            result.compounds_per_year.to_string(),
            format!("{:.4}% per period", result.periodic_rate * 100.0),
        ),
        StepRow::new(
            "Compound Periods",
            format!("{:.2}", result.compound_periods),
            format!("{} x {:.4}", result.compounds_per_year, result.years_elapsed),
        ),
        StepRow::new(
            "Effective Annual Rate",
            format_percent(result.effective_annual_rate, 3),
            format!(
                "(1 + {} / {})^{} - 1",
                format_percent(annual_rate, 2),
                result.compounds_per_year,
                result.compounds_per_year
            ),
        ),
        StepRow::new(
            "Growth Factor",
            format!("{:.4}", result.growth_factor),
            format!("(1 + {:.6})^{:.2}", result.periodic_rate, result.compound_periods),
        ),
        StepRow::new(
            "Value",
            format_currency(result.future_value, symbol),
            format!(
                "{} x {:.4}",
                format_currency(entry.amount_f64(), symbol),
                result.growth_factor
            ),
        ),
    ]
}

fn title(result: &EntryResult<'_>, symbol: &str) -> String {
    let entry = result.entry;
    let mut title = format!(
        "Entry #{}: {} {} on {}",
        entry.id(),
        entry.kind(),
        format_currency(entry.amount_f64(), symbol),
        entry.date()
    );
    if let Some(description) = entry.description() {
        title.push_str(&format!(" ({description})"));
    }
    title
}

/// Execute the explain command.
pub fn execute(args: ExplainArgs, ctx: &Context) -> Result<()> {
    let (ledger, config) = args.calc.resolve(&ctx.config)?;
    let evaluation = ledger.evaluate(&config);
    let symbol = ctx.config.currency_symbol.as_str();

    let selected: Vec<&EntryResult<'_>> = match args.id {
        Some(id) => {
            let result = evaluation
                .find(EntryId::new(id))
                .ok_or(CliError::UnknownEntry(id))?;
            vec![result]
        }
        None => evaluation.entries.iter().collect(),
    };

    match ctx.format {
        OutputFormat::Table => {
            if selected.is_empty() {
                println!("No entries.");
            }
            for result in &selected {
                if !ctx.quiet {
                    print_header(&title(result, symbol));
                }
                print_output(&steps(result, config.annual_rate, symbol), OutputFormat::Table)?;
            }
        }
        OutputFormat::Json => {
            print_json(&selected)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<CsvRow> = selected
                .iter()
                .map(|r| CsvRow {
                    id: r.entry.id().get(),
                    date: r.entry.date().to_string(),
                    kind: r.entry.kind().as_str(),
                    days_elapsed: r.days_elapsed,
                    years_elapsed: r.years_elapsed,
                    compounds_per_year: r.compounds_per_year,
                    compound_periods: r.compound_periods,
                    periodic_rate: r.periodic_rate,
                    effective_annual_rate: r.effective_annual_rate,
                    growth_factor: r.growth_factor,
                    future_value: r.future_value,
                })
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for result in &selected {
                println!("{}\t{:.2}", result.entry.id(), result.future_value);
            }
        }
    }

    Ok(())
}
