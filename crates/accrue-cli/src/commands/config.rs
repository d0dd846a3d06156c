//! Config command implementation.
//!
//! Manages the defaults file.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{CliConfig, ConfigKey};
use crate::output::{
    print_header, print_info, print_json, print_output, print_success, print_warning, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: ConfigKey,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: ConfigKey,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings
    #[arg(long, conflicts_with = "key")]
    pub all: bool,

    /// Specific key to reset
    pub key: Option<ConfigKey>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Get(get_args) => execute_get(get_args, ctx),
        ConfigCommand::Set(set_args) => execute_set(set_args, ctx),
        ConfigCommand::List => execute_list(ctx),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, ctx),
        ConfigCommand::Path => execute_path(ctx),
    }
}

fn execute_show(ctx: &Context) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), ctx.config.get(*key)))
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Current Configuration");
            }
            print_output(&results, OutputFormat::Table)?;
        }
        OutputFormat::Json => print_json(&ctx.config)?,
        OutputFormat::Csv => print_output(&results, OutputFormat::Csv)?,
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }
    Ok(())
}

fn execute_get(args: GetArgs, ctx: &Context) -> Result<()> {
    let value = ctx.config.get(args.key);
    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => println!("{}: {}", args.key.as_str(), value),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": args.key.as_str(),
                "value": value,
            });
            print_json(&output)?;
        }
        OutputFormat::Minimal => println!("{value}"),
    }
    Ok(())
}

fn execute_set(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    config.set(args.key, &args.value)?;
    config.save(&ctx.config_path)?;

    if !ctx.quiet {
        print_success(&format!("Set {} = {}", args.key.as_str(), config.get(args.key)));
    }
    Ok(())
}

fn execute_list(ctx: &Context) -> Result<()> {
    let defaults = CliConfig::default();
    match ctx.format {
        OutputFormat::Json => {
            let output: BTreeMap<&str, serde_json::Value> = ConfigKey::all()
                .iter()
                .map(|key| {
                    (
                        key.as_str(),
                        serde_json::json!({
                            "description": key.description(),
                            "default": defaults.get(*key),
                        }),
                    )
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
        format => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), defaults.get(*key)),
                    )
                })
                .collect();
            if format == OutputFormat::Table && !ctx.quiet {
                print_header("Available Configuration Keys");
            }
            print_output(&results, format)?;
        }
    }
    Ok(())
}

fn execute_reset(args: ResetArgs, ctx: &Context) -> Result<()> {
    if args.all {
        CliConfig::default().save(&ctx.config_path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key) = args.key {
        let mut config = ctx.config.clone();
        config.reset(key);
        config.save(&ctx.config_path)?;
        print_success(&format!("Reset {} to default ({})", key.as_str(), config.get(key)));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }
    Ok(())
}

fn execute_path(ctx: &Context) -> Result<()> {
    if ctx.format == OutputFormat::Minimal || ctx.quiet {
        println!("{}", ctx.config_path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", ctx.config_path.display()));
    if ctx.config_path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
