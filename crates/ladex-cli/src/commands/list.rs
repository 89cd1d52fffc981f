//! List command - show document names from the configured manifest.

use std::path::PathBuf;

use clap::Args;
use console::style;

use ladex_core::source::{DocumentStore, ManifestStore};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Override the manifest path from the config
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

pub async fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let manifest = args.manifest.unwrap_or(config.storage.manifest);

    // Documents live alongside their manifest in the local stand-in store.
    let document_dir = match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let store = ManifestStore::new(&manifest, document_dir);

    let names = store.list_documents()?;
    if names.is_empty() {
        println!(
            "{} Manifest {} is empty.",
            style("ℹ").blue(),
            manifest.display()
        );
        return Ok(());
    }

    println!(
        "{} documents in {} (bucket {}):",
        names.len(),
        manifest.display(),
        config.storage.bucket
    );
    for name in names {
        println!("  {name}");
    }

    Ok(())
}
