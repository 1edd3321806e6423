//! Core library for interpreting Indonesian transaction text.
//!
//! This crate provides:
//! - Receipt parsing (OCR text blobs from bank/e-wallet receipts)
//! - Command parsing (short manual entries like `qris 50000 Indomaret`)
//! - Amount normalization across local and international numeral formats
//! - Transaction data models and parser configuration

pub mod command;
pub mod error;
pub mod models;
pub mod receipt;

pub use command::CommandParser;
pub use error::{ResiError, Result};
pub use models::config::{CommandConfig, ParserConfig, ReceiptConfig};
pub use models::transaction::{TransactionGuess, TransactionKind};
pub use receipt::rules::normalize_amount;
pub use receipt::{ExtractionReport, ReceiptParser, TransactionParser};

/// Parse an OCR receipt text blob with default settings.
pub fn parse_receipt_text(text: &str) -> TransactionGuess {
    ReceiptParser::new().parse(text)
}

/// Parse a short manual entry with default settings.
pub fn parse_command_text(text: &str) -> TransactionGuess {
    CommandParser::new().parse(text)
}
