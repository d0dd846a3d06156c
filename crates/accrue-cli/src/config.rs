//! Persistent CLI defaults.
//!
//! Stored as TOML in the per-user config directory, or at the path given
//! with `--config`. A missing file means all defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use accrue_core::CompoundingFrequency;
use accrue_engine::DEFAULT_RATE_PERCENT;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Annual interest rate, as a percentage.
    pub rate_percent: f64,
    /// Compounding frequency.
    pub frequency: CompoundingFrequency,
    /// Output format.
    pub format: OutputFormat,
    /// Symbol prefixed to money amounts.
    pub currency_symbol: String,
    /// Whether to color terminal output.
    pub use_colors: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rate_percent: DEFAULT_RATE_PERCENT,
            frequency: CompoundingFrequency::default(),
            format: OutputFormat::default(),
            currency_symbol: "$".to_string(),
            use_colors: true,
        }
    }
}

impl CliConfig {
    /// Default location: `<config dir>/accrue/config.toml`.
    pub fn default_path() -> CliResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
        Ok(base.join("accrue").join("config.toml"))
    }

    /// Resolves an explicit path or falls back to the default one.
    pub fn resolve_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Loads the file at `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Writes the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Current value of `key`, rendered as text.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Rate => self.rate_percent.to_string(),
            ConfigKey::Frequency => self.frequency.as_str().to_string(),
            ConfigKey::Format => self.format.as_str().to_string(),
            ConfigKey::CurrencySymbol => self.currency_symbol.clone(),
            ConfigKey::UseColors => self.use_colors.to_string(),
        }
    }

    /// Parses and stores `value` under `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> CliResult<()> {
        let value = value.trim();
        match key {
            ConfigKey::Rate => {
                let rate = value
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite())
                    .ok_or_else(|| CliError::Config(format!("Invalid rate: {value}")))?;
                self.rate_percent = rate;
            }
            ConfigKey::Frequency => {
                self.frequency = CompoundingFrequency::from_str(value)
                    .map_err(|e| CliError::Config(e.to_string()))?;
            }
            ConfigKey::Format => {
                self.format = match value.to_lowercase().as_str() {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    "csv" => OutputFormat::Csv,
                    "minimal" => OutputFormat::Minimal,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid format: {value}. Use table, json, csv, or minimal."
                        )))
                    }
                };
            }
            ConfigKey::CurrencySymbol => {
                self.currency_symbol = value.to_string();
            }
            ConfigKey::UseColors => {
                self.use_colors = match value.to_lowercase().as_str() {
                    "true" | "yes" | "1" | "on" => true,
                    "false" | "no" | "0" | "off" => false,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid boolean: {value}. Use true or false."
                        )))
                    }
                };
            }
        }
        Ok(())
    }

    /// Restores the default for a single key.
    pub fn reset(&mut self, key: ConfigKey) {
        let defaults = Self::default();
        match key {
            ConfigKey::Rate => self.rate_percent = defaults.rate_percent,
            ConfigKey::Frequency => self.frequency = defaults.frequency,
            ConfigKey::Format => self.format = defaults.format,
            ConfigKey::CurrencySymbol => self.currency_symbol = defaults.currency_symbol,
            ConfigKey::UseColors => self.use_colors = defaults.use_colors,
        }
    }
}

/// Settable configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Annual rate percentage
    Rate,
    /// Compounding frequency
    Frequency,
    /// Output format
    Format,
    /// Currency symbol
    CurrencySymbol,
    /// Colored output
    UseColors,
}

impl ConfigKey {
    /// Key name as written in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rate => "rate_percent",
            Self::Frequency => "frequency",
            Self::Format => "format",
            Self::CurrencySymbol => "currency_symbol",
            Self::UseColors => "use_colors",
        }
    }

    /// One-line help text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Rate => "Annual interest rate in percent (e.g. 11 for 11%)",
            Self::Frequency => "Compounding frequency (daily, weekly, monthly, yearly)",
            Self::Format => "Output format (table, json, csv, minimal)",
            Self::CurrencySymbol => "Symbol shown before money amounts",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// All keys, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Rate,
            Self::Frequency,
            Self::Format,
            Self::CurrencySymbol,
            Self::UseColors,
        ]
    }
}

impl FromStr for ConfigKey {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "rate_percent" | "rate" => Ok(Self::Rate),
            "frequency" | "freq" => Ok(Self::Frequency),
            "format" => Ok(Self::Format),
            "currency_symbol" | "currency" => Ok(Self::CurrencySymbol),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::Config(format!("Unknown configuration key: {s}"))),
        }
    }
}
