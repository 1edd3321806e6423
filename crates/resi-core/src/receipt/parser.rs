//! Heuristic parser for OCR receipt text blobs.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ReceiptConfig;
use crate::models::transaction::TransactionGuess;

use super::rules::{
    apply_brand, classify_receipt, detect_brand, extract_description, select_amount, truncate,
};
use super::TransactionParser;

/// Result of a receipt parse with diagnostics attached.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// The transaction guess.
    pub guess: TransactionGuess,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Heuristic receipt parser for Indonesian bank and e-wallet receipts.
pub struct ReceiptParser {
    config: ReceiptConfig,
}

impl ReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: ReceiptConfig::default(),
        }
    }

    /// Use the given configuration.
    pub fn with_config(mut self, config: ReceiptConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the plausibility band for accepted amounts.
    pub fn with_amount_bounds(mut self, min_amount: u64, max_amount: u64) -> Self {
        self.config.min_amount = min_amount;
        self.config.max_amount = max_amount;
        self
    }

    /// Parse and report warnings for fields that could not be extracted.
    pub fn parse_with_report(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let guess = self.parse(text);

        if guess.amount.is_none() {
            warnings.push("could not extract a plausible amount".to_string());
        }
        if guess.description.is_empty() {
            warnings.push("could not extract a merchant or recipient".to_string());
        }

        ExtractionReport {
            guess,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionParser for ReceiptParser {
    fn parse(&self, text: &str) -> TransactionGuess {
        info!("parsing receipt from {} characters of text", text.len());

        let amount = select_amount(text, &self.config);
        let kind = classify_receipt(text);

        let mut description = extract_description(text, self.config.max_description_len);

        // The consumed amount token must not leak into the description.
        if let Some(candidate) = &amount {
            if description.contains(&candidate.source) {
                description = description.replace(&candidate.source, "").trim().to_string();
            }
        }

        let brand = detect_brand(text);
        description = apply_brand(brand, description);
        // Brand prefixing can push past the limit; truncate last.
        description = truncate(&description, self.config.max_description_len);

        debug!(
            "receipt parsed: amount={:?} kind={:?} description={:?}",
            amount.as_ref().map(|c| c.value),
            kind,
            description
        );

        TransactionGuess {
            amount: amount.map(|c| c.value),
            kind,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::transaction::TransactionKind;

    #[test]
    fn test_bca_transfer_receipt() {
        let text = "m-BCA\nm-Transfer BERHASIL\nKe Rekening Tujuan\nBCA\n1234567890\nBUDI SANTOSO\nNominal Transfer Rp 150.000,00\nSaldo Rp 5.000.000";

        let guess = ReceiptParser::new().parse(text);

        // The explicit nominal transfer phrase wins over the larger balance.
        assert_eq!(guess.amount, Some(150000));
        assert_eq!(guess.kind, TransactionKind::Transfer);
        assert_eq!(guess.description, "[BCA] BUDI SANTOSO");
    }

    #[test]
    fn test_qris_merchant_receipt() {
        let text = "QRIS\nMerchant: Warung Kopi\nTotal Transaksi Rp 25.000";

        let guess = ReceiptParser::new().parse(text);

        assert_eq!(guess.amount, Some(25000));
        assert_eq!(guess.kind, TransactionKind::Qris);
        assert_eq!(guess.description, "Warung Kopi");
    }

    #[test]
    fn test_account_number_never_selected() {
        let text = "Transfer\nke rekening 1234567890123456\nRp 75.000";

        let guess = ReceiptParser::new().parse(text);
        assert_eq!(guess.amount, Some(75000));
    }

    #[test]
    fn test_brand_without_description() {
        let text = "gopay\nrp 15.000\n12345";

        let guess = ReceiptParser::new().parse(text);
        assert_eq!(guess.amount, Some(15000));
        assert_eq!(guess.description, "Transaksi GoPay");
    }

    #[test]
    fn test_empty_text_degrades_to_defaults() {
        let guess = ReceiptParser::new().parse("");

        assert_eq!(guess.amount, None);
        assert_eq!(guess.kind, TransactionKind::Qris);
        assert_eq!(guess.description, "");
    }

    #[test]
    fn test_idempotent() {
        let text = "Penerima\nTOKO MAJU\nTotal Transaksi Rp 42.000";
        let parser = ReceiptParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn test_description_bounded_after_branding() {
        let text = format!("bca\nMerchant: {}", "B".repeat(300));
        let guess = ReceiptParser::new().parse(&text);
        assert_eq!(guess.description.chars().count(), 100);
        assert!(guess.description.starts_with("[BCA] "));
    }

    #[test]
    fn test_amount_token_stripped_from_description() {
        let text = "Kepada: Budi 29.000\nRp 29.000";

        let guess = ReceiptParser::new().parse(text);
        assert_eq!(guess.amount, Some(29000));
        assert_eq!(guess.description, "Budi");
    }

    #[test]
    fn test_custom_amount_bounds() {
        let parser = ReceiptParser::new().with_amount_bounds(100, 10_000);
        let guess = parser.parse("Rp 500");
        assert_eq!(guess.amount, Some(500));
    }

    #[test]
    fn test_report_warnings() {
        let report = ReceiptParser::new().parse_with_report("tidak ada apa-apa");
        assert_eq!(report.warnings.len(), 2);
    }
}
