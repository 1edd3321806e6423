//! Bank and e-wallet brand detection.

/// Brand keywords, checked in order; first hit wins.
const BRANDS: &[(&str, &[&str])] = &[
    ("Mandiri", &["mandiri", "livin"]),
    ("BCA", &["bca", "bank central asia"]),
    ("BNI", &["bni"]),
    ("BRI", &["bri"]),
    ("OVO", &["ovo"]),
    ("GoPay", &["gopay"]),
    ("DANA", &["dana"]),
];

/// Detect the issuing bank or e-wallet from receipt text.
pub fn detect_brand(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    BRANDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(name, _)| *name)
}

/// Fold a detected brand into the description: `[Brand] desc`, or
/// `Transaksi Brand` when no description was found.
pub fn apply_brand(brand: Option<&str>, description: String) -> String {
    match brand {
        Some(brand) if description.is_empty() => format!("Transaksi {}", brand),
        Some(brand) => format!("[{}] {}", brand, description),
        None => description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_brand() {
        assert_eq!(detect_brand("Livin' by Mandiri"), Some("Mandiri"));
        assert_eq!(detect_brand("m-BCA transfer"), Some("BCA"));
        assert_eq!(detect_brand("Pembayaran GoPay"), Some("GoPay"));
        assert_eq!(detect_brand("Warung Kopi"), None);
    }

    #[test]
    fn test_brand_order_prefers_earlier_entry() {
        // Mandiri receipts routinely mention the recipient's bank too.
        assert_eq!(detect_brand("mandiri transfer ke bca"), Some("Mandiri"));
    }

    #[test]
    fn test_apply_brand() {
        assert_eq!(
            apply_brand(Some("BCA"), "Budi Santoso".to_string()),
            "[BCA] Budi Santoso"
        );
        assert_eq!(apply_brand(Some("OVO"), String::new()), "Transaksi OVO");
        assert_eq!(apply_brand(None, "Warung".to_string()), "Warung");
    }
}
