//! WASM bindings for Indonesian transaction receipt interpretation.
//!
//! The original pipeline runs OCR in the browser (Tesseract.js) and hands the
//! recognized text to these bindings for interpretation.

use wasm_bindgen::prelude::*;

use resi_core::{
    CommandParser, ReceiptConfig, ReceiptParser, TransactionGuess, TransactionParser,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse an OCR receipt text blob into a transaction guess.
#[wasm_bindgen]
pub fn parse_receipt_text(text: &str) -> Result<JsValue, JsValue> {
    let guess = resi_core::parse_receipt_text(text);
    to_js(&guess)
}

/// Parse a short manual entry (e.g. `qris 50000 Indomaret`).
#[wasm_bindgen]
pub fn parse_command_text(text: &str) -> Result<JsValue, JsValue> {
    let guess = resi_core::parse_command_text(text);
    to_js(&guess)
}

/// Normalize a numeric token (`29.000,00`, `29,000.00`, `29000`) to whole
/// rupiah. Returns `undefined` when the token has no recognized shape.
#[wasm_bindgen]
pub fn normalize_amount(token: &str) -> Option<f64> {
    resi_core::normalize_amount(token).map(|v| v as f64)
}

fn to_js(guess: &TransactionGuess) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(guess).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Receipt scanner class for browser use.
#[wasm_bindgen]
pub struct ReceiptScanner {
    config: ReceiptConfig,
}

#[wasm_bindgen]
impl ReceiptScanner {
    /// Create a new scanner with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ReceiptConfig::default(),
        }
    }

    /// Set the plausibility band for accepted amounts.
    #[wasm_bindgen]
    pub fn set_amount_bounds(&mut self, min_amount: u64, max_amount: u64) {
        self.config.min_amount = min_amount;
        self.config.max_amount = max_amount;
    }

    /// Set the maximum description length.
    #[wasm_bindgen]
    pub fn set_max_description_len(&mut self, max_len: usize) {
        self.config.max_description_len = max_len;
    }

    /// Interpret recognized receipt text.
    #[wasm_bindgen]
    pub fn scan(&self, text: &str) -> Result<JsValue, JsValue> {
        let parser = ReceiptParser::new().with_config(self.config.clone());
        to_js(&parser.parse(text))
    }

    /// Interpret recognized receipt text, including warnings and timing.
    #[wasm_bindgen]
    pub fn scan_with_report(&self, text: &str) -> Result<JsValue, JsValue> {
        let parser = ReceiptParser::new().with_config(self.config.clone());
        let report = parser.parse_with_report(text);

        #[derive(serde::Serialize)]
        struct ScanReport {
            guess: TransactionGuess,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ScanReport {
            guess: report.guess,
            warnings: report.warnings,
            processing_time_ms: report.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Interpret a manual entry string.
    #[wasm_bindgen]
    pub fn scan_entry(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&CommandParser::new().parse(text))
    }
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("29.000,00"), Some(29000.0));
        assert_eq!(normalize_amount("abc"), None);
    }

    #[wasm_bindgen_test]
    fn test_parse_receipt_text() {
        let value = parse_receipt_text("Total Transaksi Rp 25.000").unwrap();
        assert!(!value.is_null());
    }
}
