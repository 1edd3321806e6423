//! Scan command - interpret a single receipt text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use resi_core::{ParserConfig, ReceiptParser, TransactionParser};

use super::OutputFormat;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings and timing
    #[arg(long)]
    show_report: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        ParserConfig::from_file(std::path::Path::new(path))?
    } else {
        ParserConfig::default()
    };

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input text is empty");
    }

    info!("Scanning {} characters of receipt text", text.len());

    let parser = ReceiptParser::new().with_config(config.receipt);
    let report = parser.parse_with_report(&text);

    let output = super::format_guess(&report.guess, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_report {
        if !report.warnings.is_empty() {
            eprintln!("{}", style("Warnings:").yellow());
            for warning in &report.warnings {
                eprintln!("  - {}", warning);
            }
        }
        eprintln!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            report.processing_time_ms
        );
    }

    debug!("Scan complete");

    Ok(())
}

/// Read the input file, or stdin when the path is "-".
fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}
