//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod list;
pub mod process;

use std::path::Path;

use ladex_core::models::config::LadexConfig;

/// Load the config from an explicit path, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LadexConfig> {
    match config_path {
        Some(path) => Ok(LadexConfig::from_file(Path::new(path))?),
        None => Ok(LadexConfig::default()),
    }
}
