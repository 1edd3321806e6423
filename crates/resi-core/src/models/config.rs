//! Configuration structures for the parsers.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the resi parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Receipt parser configuration.
    pub receipt: ReceiptConfig,

    /// Command parser configuration.
    pub command: CommandConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            receipt: ReceiptConfig::default(),
            command: CommandConfig::default(),
        }
    }
}

/// Receipt parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// Smallest amount accepted as a transaction total. Smaller numbers on a
    /// receipt are almost always fees, quantities, or reference fragments.
    pub min_amount: u64,

    /// Largest amount accepted as a transaction total. Larger numbers are
    /// account or reference numbers.
    pub max_amount: u64,

    /// Maximum length of the extracted description, in characters.
    pub max_description_len: usize,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            min_amount: 1000,
            max_amount: 1_000_000_000,
            max_description_len: 100,
        }
    }
}

/// Command parser configuration.
///
/// The amount floor is lower than the receipt parser's: manual entries may
/// legitimately record small amounts that would be noise on an OCR receipt.
/// The two floors are configured independently on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Smallest amount accepted from a manual entry.
    pub min_amount: u64,

    /// Maximum length of the extracted description, in characters.
    pub max_description_len: usize,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            min_amount: 100,
            max_description_len: 100,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.receipt.min_amount, 1000);
        assert_eq!(config.receipt.max_amount, 1_000_000_000);
        assert_eq!(config.command.min_amount, 100);
        assert_eq!(config.receipt.max_description_len, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"receipt": {"min_amount": 500}}"#).unwrap();
        assert_eq!(config.receipt.min_amount, 500);
        assert_eq!(config.receipt.max_amount, 1_000_000_000);
        assert_eq!(config.command.min_amount, 100);
    }
}
