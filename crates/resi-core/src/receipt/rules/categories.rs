//! Keyword-based transaction type classification.

use crate::models::transaction::TransactionKind;

// Receipt signals, checked in this order. First set with a hit wins.
const RECEIPT_TRANSFER: &[&str] = &["m-transfer", "transfer", "bi fast", "bifast", "ke rekening"];
const RECEIPT_QRIS: &[&str] = &["qris", "qr bayar", "pembayaran berhasil", "merchant"];
const RECEIPT_WITHDRAWAL: &[&str] = &["tarik tunai", "withdraw", "atm"];

// Command keywords use a different check order: a manual entry is far more
// likely to lead with the action word.
const COMMAND_WITHDRAWAL: &[&str] = &["tarik", "withdraw", "atm"];
const COMMAND_TRANSFER: &[&str] = &["transfer", "tf", "kirim"];
const COMMAND_QRIS: &[&str] = &["qris", "scan", "bayar"];

fn classify(lower: &str, sets: &[(&[&str], TransactionKind)]) -> TransactionKind {
    for (keywords, kind) in sets {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *kind;
        }
    }
    TransactionKind::default()
}

/// Classify a receipt text blob. Defaults to QRIS when nothing matches.
pub fn classify_receipt(text: &str) -> TransactionKind {
    let lower = text.to_lowercase();
    classify(
        &lower,
        &[
            (RECEIPT_TRANSFER, TransactionKind::Transfer),
            (RECEIPT_QRIS, TransactionKind::Qris),
            (RECEIPT_WITHDRAWAL, TransactionKind::Withdrawal),
        ],
    )
}

/// Classify a manual command entry. Defaults to QRIS when nothing matches.
pub fn classify_command(text: &str) -> TransactionKind {
    let lower = text.to_lowercase();
    classify(
        &lower,
        &[
            (COMMAND_WITHDRAWAL, TransactionKind::Withdrawal),
            (COMMAND_TRANSFER, TransactionKind::Transfer),
            (COMMAND_QRIS, TransactionKind::Qris),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_receipt_transfer() {
        assert_eq!(classify_receipt("BI FAST ke rekening"), TransactionKind::Transfer);
        assert_eq!(classify_receipt("m-Transfer BERHASIL"), TransactionKind::Transfer);
    }

    #[test]
    fn test_classify_receipt_qris() {
        assert_eq!(classify_receipt("QRIS Pembayaran Berhasil"), TransactionKind::Qris);
        assert_eq!(classify_receipt("Merchant: Warung Kopi"), TransactionKind::Qris);
    }

    #[test]
    fn test_classify_receipt_withdrawal() {
        assert_eq!(classify_receipt("Tarik Tunai ATM"), TransactionKind::Withdrawal);
    }

    #[test]
    fn test_receipt_transfer_wins_over_qris() {
        // Both signal sets present; transfer is checked first.
        let text = "Transfer berhasil ke merchant";
        assert_eq!(classify_receipt(text), TransactionKind::Transfer);
    }

    #[test]
    fn test_classify_receipt_default() {
        assert_eq!(classify_receipt("struk tanpa sinyal"), TransactionKind::Qris);
    }

    #[test]
    fn test_classify_command_order() {
        assert_eq!(classify_command("tarik 200000"), TransactionKind::Withdrawal);
        assert_eq!(classify_command("tf 100000 Gaji"), TransactionKind::Transfer);
        assert_eq!(classify_command("bayar 50000"), TransactionKind::Qris);
        assert_eq!(classify_command("50000 makan"), TransactionKind::Qris);
    }
}
