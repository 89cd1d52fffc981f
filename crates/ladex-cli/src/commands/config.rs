//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use ladex_core::models::config::LadexConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "storage.bucket")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Get { key } => get_config(&key),
        ConfigCommand::Set { key, value } => set_config(&key, &value),
        ConfigCommand::Path => show_path(),
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ladex")
        .join("config.json")
}

fn load_or_default() -> anyhow::Result<LadexConfig> {
    let config_path = default_config_path();
    if config_path.exists() {
        Ok(LadexConfig::from_file(&config_path)?)
    } else {
        println!(
            "{} No config file found, using defaults.",
            style("ℹ").blue()
        );
        Ok(LadexConfig::default())
    }
}

fn show_config() -> anyhow::Result<()> {
    let config = load_or_default()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = LadexConfig::default();
    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(key: &str) -> anyhow::Result<()> {
    let config = load_or_default()?;
    let value = serde_json::to_value(&config)?;

    match lookup(&value, key) {
        Some(found) => println!("{found}"),
        None => anyhow::bail!("Unknown configuration key: {key}"),
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> anyhow::Result<()> {
    let config_path = default_config_path();
    let config = if config_path.exists() {
        LadexConfig::from_file(&config_path)?
    } else {
        LadexConfig::default()
    };

    let mut tree = serde_json::to_value(&config)?;
    let slot = lookup_mut(&mut tree, key)
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {key}"))?;

    // Keep the stored type: parse booleans/numbers, fall back to string
    *slot = serde_json::from_str(value).unwrap_or(serde_json::Value::String(value.to_string()));

    let updated: LadexConfig = serde_json::from_value(tree)?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    updated.save(&config_path)?;

    println!("{} Set {key} = {value}", style("✓").green());
    Ok(())
}

fn show_path() -> anyhow::Result<()> {
    println!("{}", default_config_path().display());
    Ok(())
}

fn lookup<'a>(value: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.').try_fold(value, |v, part| v.get(part))
}

fn lookup_mut<'a>(
    value: &'a mut serde_json::Value,
    key: &str,
) -> Option<&'a mut serde_json::Value> {
    key.split('.').try_fold(value, |v, part| v.get_mut(part))
}
