//! Merchant/recipient description extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::{MERCHANT_LABEL, PENERIMA, REKENING_TUJUAN, TUJUAN_TRANSAKSI};
use super::{is_purely_numeric, truncate};

lazy_static! {
    /// Labeled-field patterns per known receipt layouts, most specific first.
    static ref DESCRIPTION_LABELS: Vec<&'static Regex> = vec![
        &*PENERIMA,
        &*REKENING_TUJUAN,
        &*MERCHANT_LABEL,
        &*TUJUAN_TRANSAKSI,
    ];
}

/// Extract a merchant or recipient label from receipt text.
///
/// Labeled fields are tried first; the fallback scans for the first line
/// that looks like a proper noun. Returns an empty string when neither
/// yields anything usable.
pub fn extract_description(text: &str, max_len: usize) -> String {
    for pattern in DESCRIPTION_LABELS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let value = caps[1].trim();
            // Reject account numbers and stray short fragments.
            if value.len() > 2 && !is_purely_numeric(value) {
                return truncate(value, max_len);
            }
        }
    }

    // Fallback: first line that plausibly names a merchant or person.
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        if line.len() > 3
            && !is_purely_numeric(line)
            && !lower.contains("rp")
            && !lower.contains("bank")
            && !lower.contains("transaksi")
            && line.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        {
            return truncate(line, max_len);
        }
    }

    String::new()
}
