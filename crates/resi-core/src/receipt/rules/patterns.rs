//! Common regex patterns for Indonesian receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount anchors, most specific first.
    // BCA transfer receipts: "NOMINAL TRANSFER Rp 29.000,00"
    pub static ref NOMINAL_TRANSFER: Regex = Regex::new(
        r"(?i)nominal\s*(?:transfer)?\s*rp\.?\s*([\d.,]+)"
    ).unwrap();

    // Mandiri/QRIS receipts: "Total Transaksi Rp10.000" or "Total Rp 10.000"
    pub static ref TOTAL_TRANSAKSI: Regex = Regex::new(
        r"(?i)(?:total\s*transaksi|total)\s*rp\.?\s*([\d.,]+)"
    ).unwrap();

    pub static ref RUPIAH_GENERIC: Regex = Regex::new(
        r"(?i)rp\.?\s*([\d.,]+)"
    ).unwrap();

    pub static ref IDR_GENERIC: Regex = Regex::new(
        r"(?i)idr\.?\s*([\d.,]+)"
    ).unwrap();

    // "Jumlah: 29.000" / "Nominal 29.000" without a currency marker
    pub static ref LABELED_BARE: Regex = Regex::new(
        r"(?i)(?:jumlah|nominal)[:\s]*([\d.,]+)"
    ).unwrap();

    // Any grouped numeral as a last resort (1.000 or 1,000)
    pub static ref GROUPED_NUMERAL: Regex = Regex::new(
        r"(\d{1,3}(?:[.,]\d{3})+(?:[.,]\d{2})?)"
    ).unwrap();

    // Override anchors. A transfer receipt always states the transferred
    // amount this way; it must not lose to fee or balance figures elsewhere
    // on the same receipt.
    pub static ref NOMINAL_TRANSFER_STRICT: Regex = Regex::new(
        r"(?i)nominal\s*transfer\s*rp\.?\s*([\d.,]+)"
    ).unwrap();

    pub static ref TOTAL_TRANSAKSI_STRICT: Regex = Regex::new(
        r"(?i)total\s*transaksi\s*rp\.?\s*([\d.,]+)"
    ).unwrap();

    // Numeral shapes, anchored. Local: dot-grouped thousands, optional
    // two-digit comma fraction (29.000,00). International is the mirror
    // image (29,000.00). Plain: bare digits plus optional two-digit cents.
    pub static ref LOCAL_NUMERAL: Regex = Regex::new(
        r"^(\d{1,3}(?:\.\d{3})*)(?:,(\d{2}))?$"
    ).unwrap();

    pub static ref INTERNATIONAL_NUMERAL: Regex = Regex::new(
        r"^(\d{1,3}(?:,\d{3})*)(?:\.(\d{2}))?$"
    ).unwrap();

    pub static ref PLAIN_NUMERAL: Regex = Regex::new(
        r"^(\d+)(?:[.,](\d{2}))?$"
    ).unwrap();

    // Recipient/merchant labels per known receipt layouts.
    // Mandiri QRIS: "Penerima" followed by the merchant name.
    pub static ref PENERIMA: Regex = Regex::new(
        r"(?i)penerima\s*\n?\s*([^\n]+)"
    ).unwrap();

    // BCA transfer: "Ke Rekening Tujuan", then a bank name line and an
    // account number line, then the recipient.
    pub static ref REKENING_TUJUAN: Regex = Regex::new(
        r"(?i)ke\s*rekening\s*tujuan\s*\n?\s*\w+\s*\n?\s*\d+\s*\n?\s*([^\n]+)"
    ).unwrap();

    pub static ref MERCHANT_LABEL: Regex = Regex::new(
        r"(?i)(?:merchant|toko|kepada|nama\s*penerima)[:\s]*\n?\s*([^\n]+)"
    ).unwrap();

    pub static ref TUJUAN_TRANSAKSI: Regex = Regex::new(
        r"(?i)tujuan\s*transaksi[:\s]*\n?\s*([^\n]+)"
    ).unwrap();

    // Command entry: first run of 1-3 digits plus loosely grouped triplets.
    pub static ref COMMAND_AMOUNT: Regex = Regex::new(
        r"(\d{1,3}(?:[.,]?\d{3})*)"
    ).unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"\d+"
    ).unwrap();

    // Type keywords stripped from a single-segment command description.
    pub static ref COMMAND_KEYWORDS: Regex = Regex::new(
        r"(?i)qris|transfer|tf|tarik|withdraw|bayar|scan"
    ).unwrap();
}
