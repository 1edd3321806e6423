//! Amount normalization and selection for Indonesian receipts.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::debug;

use super::patterns::{
    GROUPED_NUMERAL, IDR_GENERIC, INTERNATIONAL_NUMERAL, LABELED_BARE, LOCAL_NUMERAL,
    NOMINAL_TRANSFER, NOMINAL_TRANSFER_STRICT, PLAIN_NUMERAL, RUPIAH_GENERIC, TOTAL_TRANSAKSI,
    TOTAL_TRANSAKSI_STRICT,
};
use super::{AmountCandidate, FieldExtractor};
use crate::models::config::ReceiptConfig;

lazy_static! {
    /// Anchor patterns in decreasing specificity. The index in this table is
    /// the candidate priority. New receipt layouts extend this table (or the
    /// override table below); the ranking itself never changes.
    static ref AMOUNT_ANCHORS: Vec<&'static Regex> = vec![
        &*NOMINAL_TRANSFER,
        &*TOTAL_TRANSAKSI,
        &*RUPIAH_GENERIC,
        &*IDR_GENERIC,
        &*LABELED_BARE,
        &*GROUPED_NUMERAL,
    ];

    /// Explicit phrases that win outright over the ranked candidates, checked
    /// in order. Hand-tuned for the BCA transfer and Mandiri QRIS layouts.
    static ref OVERRIDE_ANCHORS: Vec<&'static Regex> = vec![
        &*NOMINAL_TRANSFER_STRICT,
        &*TOTAL_TRANSAKSI_STRICT,
    ];
}

/// Normalize a numeric token to whole rupiah.
///
/// Three shapes are tried in order, first match wins:
/// 1. Local format: `29.000,00` (dot-grouped thousands, comma fraction)
/// 2. International format: `29,000.00`
/// 3. Plain digits with optional two-digit cents: `29000.50`
///
/// A two-digit fraction is rounded half-up; rupiah amounts carry no subunit.
/// Returns `None` when none of the shapes apply.
pub fn normalize_amount(token: &str) -> Option<u64> {
    let token = token.trim();

    if let Some(caps) = LOCAL_NUMERAL.captures(token) {
        let integer = caps[1].replace('.', "");
        let cents = caps.get(2).map(|m| m.as_str()).unwrap_or("00");
        return round_to_rupiah(&integer, cents);
    }

    if let Some(caps) = INTERNATIONAL_NUMERAL.captures(token) {
        let integer = caps[1].replace(',', "");
        let cents = caps.get(2).map(|m| m.as_str()).unwrap_or("00");
        return round_to_rupiah(&integer, cents);
    }

    if let Some(caps) = PLAIN_NUMERAL.captures(token) {
        let cents = caps.get(2).map(|m| m.as_str()).unwrap_or("00");
        return round_to_rupiah(&caps[1], cents);
    }

    None
}

/// Round an integer-plus-cents pair half-up to a whole rupiah value.
fn round_to_rupiah(integer: &str, cents: &str) -> Option<u64> {
    let value = Decimal::from_str(&format!("{integer}.{cents}")).ok()?;
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

/// Amount candidate extractor over the anchor table.
pub struct AmountExtractor {
    min_amount: u64,
    max_amount: u64,
}

impl AmountExtractor {
    pub fn new() -> Self {
        let config = ReceiptConfig::default();
        Self {
            min_amount: config.min_amount,
            max_amount: config.max_amount,
        }
    }

    /// Set the plausibility band for accepted amounts.
    pub fn with_bounds(mut self, min_amount: u64, max_amount: u64) -> Self {
        self.min_amount = min_amount;
        self.max_amount = max_amount;
        self
    }

    fn accept(&self, value: u64) -> bool {
        value >= self.min_amount && value <= self.max_amount
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = AmountCandidate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut candidates = self.extract_all(text);
        // More specific pattern first, larger amount breaks ties.
        candidates.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.value.cmp(&a.value)));
        candidates.into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut candidates = Vec::new();

        for (priority, pattern) in AMOUNT_ANCHORS.iter().enumerate() {
            for caps in pattern.captures_iter(text) {
                let token = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str())
                    .unwrap_or_default();

                if let Some(value) = normalize_amount(token) {
                    if self.accept(value) {
                        candidates.push(AmountCandidate {
                            value,
                            priority,
                            source: token.to_string(),
                        });
                    }
                }
            }
        }

        candidates
    }
}

/// Select the transaction amount from a receipt text blob.
///
/// Override anchors win outright; otherwise the highest-ranked candidate
/// from the anchor table is used. Returns `None` when nothing in the text
/// normalizes into the plausibility band.
pub fn select_amount(text: &str, config: &ReceiptConfig) -> Option<AmountCandidate> {
    for anchor in OVERRIDE_ANCHORS.iter() {
        if let Some(caps) = anchor.captures(text) {
            let token = &caps[1];
            if let Some(value) = normalize_amount(token) {
                if value >= config.min_amount && value <= config.max_amount {
                    debug!("amount {} selected by override anchor", value);
                    return Some(AmountCandidate {
                        value,
                        priority: 0,
                        source: token.to_string(),
                    });
                }
            }
        }
    }

    AmountExtractor::new()
        .with_bounds(config.min_amount, config.max_amount)
        .extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_local_format() {
        assert_eq!(normalize_amount("29.000,00"), Some(29000));
        assert_eq!(normalize_amount("29.000"), Some(29000));
        assert_eq!(normalize_amount("1.234.567"), Some(1234567));
    }

    #[test]
    fn test_normalize_international_format() {
        assert_eq!(normalize_amount("29,000.00"), Some(29000));
        assert_eq!(normalize_amount("29,000"), Some(29000));
        assert_eq!(normalize_amount("1,234,567.89"), Some(1234568));
    }

    #[test]
    fn test_normalize_plain_format() {
        assert_eq!(normalize_amount("50000"), Some(50000));
        assert_eq!(normalize_amount("500,50"), Some(501));
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(normalize_amount("500.50"), Some(501));
        assert_eq!(normalize_amount("500.49"), Some(500));
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert_eq!(normalize_amount(""), None);
        assert_eq!(normalize_amount("abc"), None);
        assert_eq!(normalize_amount("12.34.5"), None);
        assert_eq!(normalize_amount("1.000."), None);
    }

    #[test]
    fn test_extract_all_filters_band() {
        let extractor = AmountExtractor::new();
        // 16-digit account number must not survive the band filter.
        let text = "Rekening 1234567890123456\nRp 29.000";
        let candidates = extractor.extract_all(text);
        assert!(candidates.iter().all(|c| c.value == 29000));
    }

    #[test]
    fn test_ranking_prefers_specific_pattern() {
        let extractor = AmountExtractor::new();
        let text = "Total Transaksi Rp 25.000\nRp 100.000 saldo";
        let best = extractor.extract(text).unwrap();
        assert_eq!(best.value, 25000);
    }

    #[test]
    fn test_tie_break_prefers_larger_amount() {
        let extractor = AmountExtractor::new();
        let text = "Rp 5.000\nRp 150.000";
        let best = extractor.extract(text).unwrap();
        assert_eq!(best.value, 150000);
    }

    #[test]
    fn test_override_beats_ranking() {
        let config = ReceiptConfig::default();
        let text = "Saldo Rp 5.000.000\nNominal Transfer Rp 150.000,00";
        let selected = select_amount(text, &config).unwrap();
        assert_eq!(selected.value, 150000);
    }

    #[test]
    fn test_no_candidate_is_none() {
        let config = ReceiptConfig::default();
        assert!(select_amount("tidak ada angka di sini", &config).is_none());
        // Below the receipt floor.
        assert!(select_amount("Rp 500", &config).is_none());
    }
}
