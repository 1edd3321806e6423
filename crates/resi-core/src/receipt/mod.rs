//! Receipt interpretation module.

mod parser;
pub mod rules;

pub use parser::{ExtractionReport, ReceiptParser};

use crate::models::transaction::TransactionGuess;

/// Trait for parsers that turn raw text into a transaction guess.
///
/// Parsing never fails: unparseable input degrades to default values and an
/// absent amount. Implementations are pure functions over the input text.
pub trait TransactionParser {
    /// Parse transaction text into a guess.
    fn parse(&self, text: &str) -> TransactionGuess;
}
