//! Batch command - process many saved response files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error};

use ladex_core::models::config::LadexConfig;
use ladex_core::{process_response_with, DocumentExtraction};

use super::process::load_response;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (saved response JSON)
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file extraction JSON
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    extraction: Option<DocumentExtraction>,
    error: Option<String>,
    processed_at: DateTime<Local>,
}

/// One row of the summary CSV.
#[derive(Serialize)]
struct SummaryRow<'a> {
    file: String,
    #[serde(rename = "BOL #")]
    bol_number: &'a str,
    #[serde(rename = "Card In time")]
    card_in: &'a str,
    #[serde(rename = "Card Out time")]
    card_out: &'a str,
    status: &'a str,
    processed_at: String,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == "json")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No response files match: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        pb.set_message(path.display().to_string());

        let result = process_file(&path, &config);
        if let Some(err) = &result.error {
            error!("{}: {err}", path.display());
            if !args.continue_on_error {
                pb.abandon();
                anyhow::bail!("{}: {err}", path.display());
            }
        } else if let (Some(dir), Some(extraction)) = (&args.output_dir, &result.extraction) {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("extraction");
            let out_path = dir.join(format!("{name}.extraction.json"));
            fs::write(&out_path, serde_json::to_string_pretty(extraction)?)?;
            debug!("Wrote {}", out_path.display());
        }

        results.push(result);
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Wrote summary to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "{} Processed {} files ({} failed) in {} ms",
        style("✓").green(),
        results.len(),
        failed,
        start.elapsed().as_millis()
    );

    Ok(())
}

fn process_file(path: &PathBuf, config: &LadexConfig) -> FileResult {
    let processed_at = Local::now();
    match load_response(path, &config.storage.bucket) {
        Ok(response) => FileResult {
            path: path.clone(),
            extraction: Some(process_response_with(&response, &config.extraction)),
            error: None,
            processed_at,
        },
        Err(err) => FileResult {
            path: path.clone(),
            extraction: None,
            error: Some(err.to_string()),
            processed_at,
        },
    }
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for result in results {
        let row = match &result.extraction {
            Some(extraction) => SummaryRow {
                file: result.path.display().to_string(),
                bol_number: &extraction.processed.bol_number,
                card_in: &extraction.processed.card_in,
                card_out: &extraction.processed.card_out,
                status: "ok",
                processed_at: result.processed_at.to_rfc3339(),
            },
            None => SummaryRow {
                file: result.path.display().to_string(),
                bol_number: "",
                card_in: "",
                card_out: "",
                status: "error",
                processed_at: result.processed_at.to_rfc3339(),
            },
        };
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
