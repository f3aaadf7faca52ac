//! Derived outputs of a position-size calculation.

use serde::{Deserialize, Serialize};

/// Result of one position-size calculation.
///
/// Produced once per `compute` call and replaced on the next; it has no
/// lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOutput {
    /// Position size in lots
    pub position_size: f64,

    /// Dollars risked: balance * risk percent / 100
    pub risk_amount: f64,

    /// Dollars lost if the stop-loss is hit.
    ///
    /// Re-derived through the position size rather than copied from
    /// `risk_amount`; the two may drift apart by float rounding.
    pub total_risk: f64,

    /// Dollars gained if the take-profit is hit
    pub profit: f64,
}

/// Informational stop-loss and take-profit quote levels around the entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    /// Quote price at which the stop-loss sits
    pub stop_loss_price: f64,

    /// Quote price at which the take-profit sits
    pub take_profit_price: f64,
}
