//! Rule-based field extractors for Indonesian transaction receipts.

pub mod amounts;
pub mod banks;
pub mod categories;
pub mod description;
pub mod patterns;

pub use amounts::{normalize_amount, select_amount, AmountExtractor};
pub use banks::{apply_brand, detect_brand};
pub use categories::{classify_command, classify_receipt};
pub use description::extract_description;
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the best match from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A normalized amount plus the rank of the pattern that produced it.
///
/// Candidates live only for the duration of one parse call; the best one is
/// selected and the rest are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCandidate {
    /// Amount in whole rupiah.
    pub value: u64,

    /// Index of the producing anchor pattern; lower is more specific.
    pub priority: usize,

    /// The numeric token as it appeared in the text.
    pub source: String,
}

/// Truncate a string to at most `max` characters on a char boundary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// True when the string is a bare digit run (account/reference number).
pub(crate) fn is_purely_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
