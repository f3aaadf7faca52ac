//! Currency-pair table: the calculator's only configuration input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SizingError;
use crate::models::CurrencyPair;

/// Ordered, read-only table of currency pairs looked up by name.
///
/// Supplied at startup (built-in default or a JSON file) and never
/// mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairTable {
    pairs: Vec<CurrencyPair>,
}

impl PairTable {
    /// Build a table from an explicit pair list.
    pub fn new(pairs: Vec<CurrencyPair>) -> Result<Self, SizingError> {
        Self::validate(&pairs)?;
        Ok(Self { pairs })
    }

    /// Parse a table from a JSON array of `{"name", "pipValue"}` records.
    pub fn from_json(text: &str) -> Result<Self, SizingError> {
        let pairs: Vec<CurrencyPair> =
            serde_json::from_str(text).map_err(|e| SizingError::InvalidInput {
                field: "pair table",
                reason: e.to_string(),
            })?;
        Self::new(pairs)
    }

    /// Look up a pair by exact name.
    pub fn lookup(&self, name: &str) -> Result<&CurrencyPair, SizingError> {
        self.pairs
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SizingError::UnknownCurrencyPair(name.to_string()))
    }

    /// Iterate pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.pairs.iter()
    }

    /// Number of pairs in the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn validate(pairs: &[CurrencyPair]) -> Result<(), SizingError> {
        if pairs.is_empty() {
            return Err(SizingError::InvalidInput {
                field: "pair table",
                reason: "no pairs defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for pair in pairs {
            if pair.name.is_empty() {
                return Err(SizingError::InvalidInput {
                    field: "pair name",
                    reason: "must not be empty".to_string(),
                });
            }
            if !seen.insert(pair.name.as_str()) {
                return Err(SizingError::InvalidInput {
                    field: "pair name",
                    reason: format!("duplicate entry {}", pair.name),
                });
            }
            if !pair.pip_value.is_finite() || pair.pip_value <= 0.0 {
                return Err(SizingError::InvalidInput {
                    field: "pip value",
                    reason: format!("{} must be a positive number", pair.name),
                });
            }
        }

        Ok(())
    }
}

impl Default for PairTable {
    /// Built-in table of majors with their per-lot pip values.
    fn default() -> Self {
        Self {
            pairs: vec![
                CurrencyPair::new("EUR/USD", 10.0),
                CurrencyPair::new("GBP/USD", 10.0),
                CurrencyPair::new("USD/CHF", 11.86817),
                CurrencyPair::new("AUD/CAD", 7.39919),
            ],
        }
    }
}
