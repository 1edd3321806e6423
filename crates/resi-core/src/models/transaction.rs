//! Transaction data models shared by the receipt and command parsers.

use serde::{Deserialize, Serialize};

/// Category of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// QRIS merchant payment.
    Qris,
    /// Bank transfer.
    Transfer,
    /// Cash withdrawal.
    Withdrawal,
}

impl Default for TransactionKind {
    fn default() -> Self {
        Self::Qris
    }
}

impl TransactionKind {
    /// Display label as used on receipts and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Qris => "QRIS",
            Self::Transfer => "Transfer",
            Self::Withdrawal => "Penarikan",
        }
    }
}

/// Best-effort interpretation of a block of transaction text.
///
/// An absent `amount` means no plausible amount was found and the caller
/// should ask the user to supply one; it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionGuess {
    /// Amount in whole rupiah. Rupiah has no subunit in persisted amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    /// Transaction category. Defaults to QRIS when nothing in the text
    /// signals otherwise.
    #[serde(default)]
    pub kind: TransactionKind,

    /// Merchant or recipient label, at most 100 characters. May be empty.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_qris() {
        assert_eq!(TransactionKind::default(), TransactionKind::Qris);
        assert_eq!(TransactionGuess::default().kind, TransactionKind::Qris);
    }

    #[test]
    fn test_serde_round_trip() {
        let guess = TransactionGuess {
            amount: Some(25000),
            kind: TransactionKind::Transfer,
            description: "Warung Kopi".to_string(),
        };

        let json = serde_json::to_string(&guess).unwrap();
        assert!(json.contains("\"transfer\""));

        let back: TransactionGuess = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guess);
    }

    #[test]
    fn test_absent_amount_not_serialized() {
        let guess = TransactionGuess::default();
        let json = serde_json::to_string(&guess).unwrap();
        assert!(!json.contains("amount"));
    }
}
