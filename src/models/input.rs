//! Input record for a single position-size calculation.

use serde::{Deserialize, Serialize};

use super::CurrencyPair;

/// Parameters for one position-size calculation.
///
/// Constructed fresh per request; it has no identity beyond its values.
/// Range constraints are enforced by the calculator, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Account balance in dollars
    pub account_balance: f64,

    /// Percent of the balance risked on the trade, in (0, 100]
    pub risk_percentage: f64,

    /// Stop-loss distance in pips
    pub stop_loss_size: f64,

    /// Pair being traded, with its per-lot pip value
    pub selected_pair: CurrencyPair,

    /// Reward pips per risked pip
    pub risk_reward: f64,

    /// Entry quote price; only shifts the informational price levels
    pub entry_price: f64,
}
