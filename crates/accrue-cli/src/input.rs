//! Loading ledger entries from JSON or CSV files.

use std::path::Path;

use accrue_core::Date;
use accrue_engine::{EntryDraft, Ledger};
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{CliError, CliResult};

/// Entry file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFileFormat {
    /// JSON array of objects.
    Json,
    /// CSV with a `date,amount,kind,description` header.
    Csv,
}

impl EntryFileFormat {
    /// Detects the format from the file extension.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(CliError::EntryFile {
                path: path.to_path_buf(),
                reason: "expected a .json or .csv file".to_string(),
            }),
        }
    }
}

/// Reads the raw drafts in `path`, without validating them.
pub fn read_drafts(path: &Path) -> CliResult<Vec<EntryDraft>> {
    let format = EntryFileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| CliError::EntryFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_drafts(&content, format).map_err(|reason| CliError::EntryFile {
        path: path.to_path_buf(),
        reason,
    })
}

/// One CSV row. Every field is kept as the text in the file.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    date: String,
    #[serde(default)]
    amount: String,
    #[serde(default, alias = "type")]
    kind: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<CsvRecord> for EntryDraft {
    fn from(record: CsvRecord) -> Self {
        Self {
            date: record.date,
            amount: record.amount,
            kind: record.kind,
            description: record.description,
        }
    }
}

/// One JSON object. The amount may be a string or a number; either way
/// its source text is kept so no digits are lost to floating point.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    date: String,
    #[serde(default)]
    amount: Option<Box<RawValue>>,
    #[serde(default, alias = "type")]
    kind: String,
    #[serde(default)]
    description: Option<String>,
}

impl JsonRecord {
    fn into_draft(self) -> Result<EntryDraft, String> {
        let amount = match self.amount.as_deref().map(RawValue::get) {
            None => String::new(),
            Some(raw) if raw.starts_with('"') => {
                serde_json::from_str::<String>(raw).map_err(|e| e.to_string())?
            }
            Some(raw) => raw.to_string(),
        };
        Ok(EntryDraft {
            date: self.date,
            amount,
            kind: self.kind,
            description: self.description,
        })
    }
}

fn parse_drafts(content: &str, format: EntryFileFormat) -> Result<Vec<EntryDraft>, String> {
    match format {
        EntryFileFormat::Json => {
            let records: Vec<JsonRecord> =
                serde_json::from_str(content).map_err(|e| e.to_string())?;
            records.into_iter().map(JsonRecord::into_draft).collect()
        }
        EntryFileFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(content.as_bytes());
            reader
                .deserialize::<CsvRecord>()
                .map(|record| record.map(EntryDraft::from).map_err(|e| e.to_string()))
                .collect()
        }
    }
}

/// Validates drafts into a ledger, reporting every field error with its
/// record number.
pub fn build_ledger(path: &Path, drafts: &[EntryDraft], today: Date) -> CliResult<Ledger> {
    let mut ledger = Ledger::new();
    let mut details = Vec::new();
    let mut rejected = 0;

    for (index, draft) in drafts.iter().enumerate() {
        match draft.validate(today) {
            Ok(entry) => {
                ledger.add(entry);
            }
            Err(errors) => {
                rejected += 1;
                for error in errors {
                    details.push(format!("  record {}: {error}", index + 1));
                }
            }
        }
    }

    if rejected > 0 {
        return Err(CliError::InvalidEntries {
            path: path.to_path_buf(),
            count: rejected,
            details: details.join("\n"),
        });
    }

    tracing::info!(path = %path.display(), entries = ledger.len(), "loaded ledger");
    Ok(ledger)
}

/// Reads and validates the entry file at `path`.
pub fn load_ledger(path: &Path, today: Date) -> CliResult<Ledger> {
    let drafts = read_drafts(path)?;
    build_ledger(path, &drafts, today)
}
