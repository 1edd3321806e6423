//! Parser for short manual transaction entries.
//!
//! Entries are deliberately typed one-liners like `qris 50000 Indomaret` or
//! `tarik 200000 ATM`, not OCR output, so no layout heuristics apply.

use tracing::debug;

use crate::models::config::CommandConfig;
use crate::models::transaction::TransactionGuess;
use crate::receipt::rules::patterns::{COMMAND_AMOUNT, COMMAND_KEYWORDS, DIGIT_RUN};
use crate::receipt::rules::{classify_command, truncate};
use crate::receipt::TransactionParser;

/// Parser for manual transaction entries.
pub struct CommandParser {
    config: CommandConfig,
}

impl CommandParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: CommandConfig::default(),
        }
    }

    /// Use the given configuration.
    pub fn with_config(mut self, config: CommandConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the smallest accepted amount.
    pub fn with_min_amount(mut self, min_amount: u64) -> Self {
        self.config.min_amount = min_amount;
        self
    }

    fn extract_amount(&self, text: &str) -> Option<u64> {
        let caps = COMMAND_AMOUNT.captures(text)?;
        let digits = caps[1].replace(['.', ','], "");
        let amount = digits.parse::<u64>().ok()?;
        if amount < self.config.min_amount {
            // Too small to be a real transaction.
            return None;
        }
        Some(amount)
    }

    fn extract_description(&self, text: &str) -> String {
        let segments: Vec<&str> = DIGIT_RUN
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let description = match segments.as_slice() {
            [] => String::new(),
            // Whatever follows the amount is the description.
            [.., last] if segments.len() > 1 => (*last).to_string(),
            [only] => COMMAND_KEYWORDS.replace_all(only, "").trim().to_string(),
            _ => String::new(),
        };

        truncate(&description, self.config.max_description_len)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionParser for CommandParser {
    fn parse(&self, text: &str) -> TransactionGuess {
        let kind = classify_command(text);
        let amount = self.extract_amount(text);
        let description = self.extract_description(text);

        debug!(
            "command parsed: amount={:?} kind={:?} description={:?}",
            amount, kind, description
        );

        TransactionGuess {
            amount,
            kind,
            description,
        }
    }
}
