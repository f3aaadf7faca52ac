//! Currency pair model with its per-lot pip value.

use serde::{Deserialize, Serialize};

/// A tradeable currency pair and the dollar value of one pip for one lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Pair name, e.g. "EUR/USD"
    pub name: String,

    /// Dollar value of a one-pip move for a one-lot position
    #[serde(rename = "pipValue")]
    pub pip_value: f64,
}

impl CurrencyPair {
    /// Create a pair from a name and pip value.
    pub fn new(name: impl Into<String>, pip_value: f64) -> Self {
        Self {
            name: name.into(),
            pip_value,
        }
    }
}
