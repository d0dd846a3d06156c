//! Balance command implementation.
//!
//! Values every entry at the balance date and prints the net balance.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use accrue_engine::{BalanceStatus, EntryResult, Evaluation};

use crate::cli::OutputFormat;
use crate::commands::{CalcArgs, Context};
use crate::output::{
    format_currency, format_percent, print_csv, print_header, print_json, print_output, KeyValue,
};

/// Arguments for the balance command.
#[derive(Args, Debug)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub calc: CalcArgs,
}

/// One table row per entry.
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl EntryRow {
    fn from_result(result: &EntryResult<'_>, symbol: &str) -> Self {
        let entry = result.entry;
        Self {
            id: entry.id().get(),
            date: entry.date().to_string(),
            kind: entry.kind().to_string(),
            amount: format_currency(entry.amount_f64(), symbol),
            value: format_currency(result.future_value, symbol),
            description: entry.description().unwrap_or_default().to_string(),
        }
    }
}

/// Flat CSV record with unformatted numbers.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u64,
    date: String,
    kind: &'static str,
    amount: Decimal,
    days_elapsed: i64,
    growth_factor: f64,
    future_value: f64,
    description: Option<&'a str>,
}

/// JSON document: the whole evaluation plus its status.
#[derive(Debug, Serialize)]
struct BalanceReport<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation<'a>,
    status: BalanceStatus,
}

/// Execute the balance command.
pub fn execute(args: BalanceArgs, ctx: &Context) -> Result<()> {
    let (ledger, config) = args.calc.resolve(&ctx.config)?;
    let evaluation = ledger.evaluate(&config);
    let symbol = ctx.config.currency_symbol.as_str();
    let balance = evaluation.balance;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<EntryRow> = evaluation
                .entries
                .iter()
                .map(|r| EntryRow::from_result(r, symbol))
                .collect();

            if !ctx.quiet {
                print_header(&format!("Entries valued at {}", config.balance_date));
            }
            print_output(&rows, OutputFormat::Table)?;

            let summary = vec![
                KeyValue::new("Balance Date", config.balance_date.to_string()),
                KeyValue::new("Annual Rate", format_percent(config.annual_rate, 2)),
                KeyValue::new("Compounding", config.frequency.to_string()),
                KeyValue::new(
                    "Effective Annual Rate",
                    format_percent(config.effective_annual_rate(), 3),
                ),
                KeyValue::new("Total Borrowed", format_currency(balance.total_borrowed, symbol)),
                KeyValue::new("Total Paid", format_currency(balance.total_paid, symbol)),
                KeyValue::new("Final Balance", format_currency(balance.net_balance.abs(), symbol)),
                KeyValue::new("Status", balance.status().to_string()),
            ];
            if !ctx.quiet {
                print_header("Summary");
            }
            print_output(&summary, OutputFormat::Table)?;
        }
        OutputFormat::Json => {
            print_json(&BalanceReport {
                evaluation: &evaluation,
                status: balance.status(),
            })?;
        }
        OutputFormat::Csv => {
            let rows: Vec<CsvRow<'_>> = evaluation
                .entries
                .iter()
                .map(|r| CsvRow {
                    id: r.entry.id().get(),
                    date: r.entry.date().to_string(),
                    kind: r.entry.kind().as_str(),
                    amount: r.entry.amount(),
                    days_elapsed: r.days_elapsed,
                    growth_factor: r.growth_factor,
                    future_value: r.future_value,
                    description: r.entry.description(),
                })
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            println!("{:.2}", balance.net_balance);
        }
    }

    Ok(())
}
