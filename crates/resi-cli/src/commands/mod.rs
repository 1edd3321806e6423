//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod entry;
pub mod scan;

use resi_core::TransactionGuess;

/// Render a guess in the given output format.
pub fn format_guess(guess: &TransactionGuess, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(guess)?),
        OutputFormat::Csv => format_csv(guess),
        OutputFormat::Text => Ok(format_text(guess)),
    }
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

fn format_csv(guess: &TransactionGuess) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["amount", "kind", "description"])?;
    wtr.write_record([
        &guess.amount.map(|a| a.to_string()).unwrap_or_default(),
        &guess.kind.label().to_string(),
        &guess.description,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(guess: &TransactionGuess) -> String {
    let mut output = String::new();

    output.push_str(&format!("Kind:        {}\n", guess.kind.label()));
    match guess.amount {
        Some(amount) => output.push_str(&format!("Amount:      Rp {}\n", amount)),
        None => output.push_str("Amount:      (not found)\n"),
    }
    output.push_str(&format!("Description: {}\n", guess.description));

    output
}
