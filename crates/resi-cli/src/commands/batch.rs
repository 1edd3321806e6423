//! Batch processing command for multiple receipt text dumps.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use resi_core::{ParserConfig, ReceiptParser, TransactionGuess, TransactionParser};

use super::OutputFormat;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ScanOutcome {
    path: PathBuf,
    guess: Option<TransactionGuess>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ParserConfig::from_file(std::path::Path::new(path))?
    } else {
        ParserConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "ocr")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching text files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = ReceiptParser::new().with_config(config.receipt);

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let result = scan_file(&path, &parser);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(guess) => {
                outcomes.push(ScanOutcome {
                    path: path.clone(),
                    guess: Some(guess),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    outcomes.push(ScanOutcome {
                        path: path.clone(),
                        guess: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = outcomes.iter().filter(|o| o.guess.is_some()).collect();
    let failed: Vec<_> = outcomes.iter().filter(|o| o.error.is_some()).collect();

    // Write per-file outputs
    for outcome in &successful {
        if let (Some(guess), Some(output_dir)) = (&outcome.guess, &args.output_dir) {
            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("transaction");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = super::format_guess(guess, args.format)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn scan_file(path: &PathBuf, parser: &ReceiptParser) -> anyhow::Result<TransactionGuess> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        anyhow::bail!("File is empty");
    }

    Ok(parser.parse(&text))
}

fn write_summary(path: &PathBuf, outcomes: &[ScanOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let processed_at = Utc::now().to_rfc3339();

    wtr.write_record([
        "filename",
        "status",
        "amount",
        "kind",
        "description",
        "processing_time_ms",
        "processed_at",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let time_ms = outcome.processing_time_ms.to_string();

        if let Some(guess) = &outcome.guess {
            let amount = guess.amount.map(|a| a.to_string()).unwrap_or_default();
            wtr.write_record([
                filename,
                "success",
                amount.as_str(),
                guess.kind.label(),
                guess.description.as_str(),
                time_ms.as_str(),
                processed_at.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                time_ms.as_str(),
                processed_at.as_str(),
                outcome.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
