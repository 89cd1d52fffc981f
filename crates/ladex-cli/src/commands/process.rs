//! Process command - extract fields from a single saved response file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ladex_core::models::config::LadexConfig;
use ladex_core::{
    process_response_with, DocumentExtraction, DocumentResponse, DocumentSource, ExpenseAnalyzer,
    ExpenseResponse, SavedResponseAnalyzer,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Saved expense-analysis response (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Saved document-text response (JSON) for the lines view
    #[arg(long)]
    document_text: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit only the three processed fields
    #[arg(long)]
    processed_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing response file: {}", args.input.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Processing {}", args.input.display()));

    let response = load_response(&args.input, &config.storage.bucket)?;
    let extraction = process_response_with(&response, &config.extraction);

    // The lines view never appears in processed-only output; don't load it.
    let lines = if args.processed_only {
        None
    } else {
        document_lines(&args, &config, &extraction)?
    };

    spinner.finish_and_clear();

    let colored = args.output.is_none();
    let output = format_extraction(&extraction, lines.as_deref(), &args, colored)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Wrote output to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    debug!("Processed in {} ms", start.elapsed().as_millis());
    Ok(())
}

/// Decode a saved response through the expense-analysis seam.
///
/// The file's directory acts as the response store and its stem as the
/// document key, so the CLI consumes the same [`ExpenseAnalyzer`] interface a
/// live service client would sit behind.
pub fn load_response(path: &Path, bucket: &str) -> anyhow::Result<ExpenseResponse> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let key = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid response path: {}", path.display()))?;

    let analyzer = SavedResponseAnalyzer::new(dir);
    let source = DocumentSource::StorageLocator {
        bucket: bucket.to_string(),
        key: key.to_string(),
    };

    analyzer
        .analyze_expense(&source)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

/// Load the lines view when configured and useful.
fn document_lines(
    args: &ProcessArgs,
    config: &LadexConfig,
    extraction: &DocumentExtraction,
) -> anyhow::Result<Option<Vec<String>>> {
    let Some(path) = &args.document_text else {
        return Ok(None);
    };

    let has_expense_data =
        !extraction.result.summary.is_empty() || !extraction.result.products.is_empty();
    if !has_expense_data && !config.extraction.lines_fallback {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let document: DocumentResponse = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("{} is not a document-text response: {e}", path.display()))?;
    Ok(Some(document.text_lines()))
}

fn format_extraction(
    extraction: &DocumentExtraction,
    lines: Option<&[String]>,
    args: &ProcessArgs,
    colored: bool,
) -> anyhow::Result<String> {
    match args.format {
        OutputFormat::Json => {
            let value = if args.processed_only {
                serde_json::to_value(&extraction.processed)?
            } else {
                let mut value = serde_json::json!({
                    "result": extraction.result,
                    "processed": extraction.processed,
                });
                if let Some(lines) = lines {
                    value["lines"] = serde_json::json!(lines);
                }
                value
            };
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["BOL #", "Card In time", "Card Out time"])?;
            writer.write_record([
                &extraction.processed.bol_number,
                &extraction.processed.card_in,
                &extraction.processed.card_out,
            ])?;
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => Ok(format_text(extraction, lines, colored)),
    }
}

fn format_text(
    extraction: &DocumentExtraction,
    lines: Option<&[String]>,
    colored: bool,
) -> String {
    // Styling stays out of file output; it is only for the terminal.
    let heading = |text: &str| {
        if colored {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();

    out.push_str(&format!("{}\n", heading("Processed fields")));
    out.push_str(&format!("  BOL #:         {}\n", extraction.processed.bol_number));
    out.push_str(&format!("  Card In time:  {}\n", extraction.processed.card_in));
    out.push_str(&format!("  Card Out time: {}\n", extraction.processed.card_out));

    out.push_str(&format!("\n{}\n", heading("Summary fields")));
    if extraction.result.summary.is_empty() {
        out.push_str("  (none)\n");
    }
    for (key, value) in &extraction.result.summary {
        out.push_str(&format!("  {key}: {value}\n"));
    }

    out.push_str(&format!("\n{}\n", heading("Products")));
    if extraction.result.products.is_empty() {
        out.push_str("  (none)\n");
    }
    for (index, product) in extraction.result.products.iter().enumerate() {
        out.push_str(&format!("  #{}\n", index + 1));
        for (key, value) in product {
            out.push_str(&format!("    {key}: {value}\n"));
        }
    }

    if let Some(lines) = lines {
        out.push_str(&format!("\n{}\n", heading("Text lines")));
        for line in lines {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out
}
