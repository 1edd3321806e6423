//! Entry command - interpret a manual transaction entry.

use clap::Args;
use console::style;

use resi_core::{CommandParser, ParserConfig, TransactionParser};

use super::OutputFormat;

/// Arguments for the entry command.
#[derive(Args)]
pub struct EntryArgs {
    /// The entry text, e.g. `qris 50000 Indomaret`
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: EntryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        ParserConfig::from_file(std::path::Path::new(path))?
    } else {
        ParserConfig::default()
    };

    let text = args.text.join(" ");

    let parser = CommandParser::new().with_config(config.command);
    let guess = parser.parse(&text);

    if guess.amount.is_none() {
        eprintln!(
            "{} No amount recognized. Example: resi entry qris 50000 Indomaret",
            style("ℹ").blue()
        );
    }

    println!("{}", super::format_guess(&guess, args.format)?);

    Ok(())
}
