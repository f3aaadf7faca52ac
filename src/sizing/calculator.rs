//! Position-size calculator: account risk and stop distance to lots.

use tracing::debug;

use crate::error::SizingError;
use crate::models::{CalculatorInput, CalculatorOutput, PriceLevels};

/// Calculator mapping a trade setup to a lot size and dollar figures.
pub struct PositionSizer;

impl PositionSizer {
    /// Compute the position size and dollar risk/profit for one setup.
    ///
    /// Deterministic and synchronous; the result depends only on `input`.
    /// Fails with [`SizingError::DivisionByZero`] on a zero stop-loss or
    /// pip value, and [`SizingError::InvalidInput`] on any non-finite or
    /// out-of-range field.
    pub fn compute(input: &CalculatorInput) -> Result<CalculatorOutput, SizingError> {
        Self::validate(input)?;

        let pip_value = input.selected_pair.pip_value;

        let risk_amount = input.account_balance * input.risk_percentage / 100.0;
        let risk_per_pip = risk_amount / input.stop_loss_size;
        let position_size = risk_per_pip / pip_value;

        // Re-derived through the position size rather than copied from
        // risk_amount; the two may differ by float rounding.
        let total_risk = input.stop_loss_size * pip_value * position_size;

        let take_profit_pips = input.stop_loss_size * input.risk_reward;
        let profit = take_profit_pips * pip_value * position_size;

        debug!(position_size, risk_amount, total_risk, profit, "Computed position size");

        Ok(CalculatorOutput {
            position_size,
            risk_amount,
            total_risk,
            profit,
        })
    }

    /// Stop-loss and take-profit quote levels around the entry price.
    ///
    /// Uses the same dollar offsets as [`Self::compute`]; callers that do
    /// not need levels can skip this entirely.
    pub fn price_levels(input: &CalculatorInput, output: &CalculatorOutput) -> PriceLevels {
        let pip_value = input.selected_pair.pip_value;
        let take_profit_pips = input.stop_loss_size * input.risk_reward;

        PriceLevels {
            stop_loss_price: input.entry_price
                - input.stop_loss_size * pip_value * output.position_size,
            take_profit_price: input.entry_price
                + take_profit_pips * pip_value * output.position_size,
        }
    }

    /// Reject non-finite fields first, then exact-zero divisors, then
    /// range violations.
    fn validate(input: &CalculatorInput) -> Result<(), SizingError> {
        let fields = [
            ("account_balance", input.account_balance),
            ("risk_percentage", input.risk_percentage),
            ("stop_loss_size", input.stop_loss_size),
            ("pip_value", input.selected_pair.pip_value),
            ("risk_reward", input.risk_reward),
            ("entry_price", input.entry_price),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SizingError::InvalidInput {
                    field,
                    reason: "must be finite".to_string(),
                });
            }
        }

        if input.stop_loss_size == 0.0 {
            return Err(SizingError::DivisionByZero {
                field: "stop_loss_size",
            });
        }
        if input.selected_pair.pip_value == 0.0 {
            return Err(SizingError::DivisionByZero { field: "pip_value" });
        }

        if input.account_balance <= 0.0 {
            return Err(SizingError::InvalidInput {
                field: "account_balance",
                reason: "must be positive".to_string(),
            });
        }
        if input.risk_percentage <= 0.0 || input.risk_percentage > 100.0 {
            return Err(SizingError::InvalidInput {
                field: "risk_percentage",
                reason: "must be in (0, 100]".to_string(),
            });
        }
        if input.stop_loss_size < 0.0 {
            return Err(SizingError::InvalidInput {
                field: "stop_loss_size",
                reason: "must be positive".to_string(),
            });
        }
        if input.selected_pair.pip_value < 0.0 {
            return Err(SizingError::InvalidInput {
                field: "pip_value",
                reason: "must be positive".to_string(),
            });
        }
        if input.risk_reward <= 0.0 {
            return Err(SizingError::InvalidInput {
                field: "risk_reward",
                reason: "must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyPair;

    const EPS: f64 = 1e-9;

    fn input(
        account_balance: f64,
        risk_percentage: f64,
        stop_loss_size: f64,
        pip_value: f64,
        risk_reward: f64,
        entry_price: f64,
    ) -> CalculatorInput {
        CalculatorInput {
            account_balance,
            risk_percentage,
            stop_loss_size,
            selected_pair: CurrencyPair::new("EUR/USD", pip_value),
            risk_reward,
            entry_price,
        }
    }

    #[test]
    fn test_small_account() {
        // $50 account, 1% risk, 2-pip stop, $10/pip, 4:1 reward
        let output = PositionSizer::compute(&input(50.0, 1.0, 2.0, 10.0, 4.0, 1.4672)).unwrap();

        assert!((output.risk_amount - 0.5).abs() < EPS);
        assert!((output.position_size - 0.025).abs() < EPS);
        assert!((output.total_risk - 0.5).abs() < EPS);
        assert!((output.profit - 2.0).abs() < EPS);
    }

    #[test]
    fn test_chf_pip_value() {
        // $1000 account, 2% risk, 10-pip stop, USD/CHF pip value, 2:1 reward
        let output =
            PositionSizer::compute(&input(1000.0, 2.0, 10.0, 11.86817, 2.0, 0.9120)).unwrap();

        assert!((output.risk_amount - 20.0).abs() < EPS);
        assert!((output.position_size - 0.16852).abs() < 1e-5);
        assert!((output.total_risk - 20.0).abs() < 1e-9);
        assert!((output.profit - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_profit_scales_with_risk_reward() {
        let base = input(2500.0, 1.5, 12.0, 10.0, 1.0, 1.1000);
        let output = PositionSizer::compute(&base).unwrap();
        assert!((output.profit - output.total_risk).abs() < EPS);

        let mut tripled = base;
        tripled.risk_reward = 3.0;
        let output = PositionSizer::compute(&tripled).unwrap();
        assert!((output.profit / output.total_risk - 3.0).abs() < EPS);
    }

    #[test]
    fn test_risk_amount_linear_in_balance() {
        let output_1x = PositionSizer::compute(&input(800.0, 2.0, 5.0, 10.0, 2.0, 1.25)).unwrap();
        let output_2x = PositionSizer::compute(&input(1600.0, 2.0, 5.0, 10.0, 2.0, 1.25)).unwrap();
        assert!((output_2x.risk_amount - 2.0 * output_1x.risk_amount).abs() < EPS);
        assert!((output_2x.position_size - 2.0 * output_1x.position_size).abs() < EPS);
    }

    #[test]
    fn test_zero_stop_loss_is_division_by_zero() {
        let err = PositionSizer::compute(&input(50.0, 1.0, 0.0, 10.0, 4.0, 1.4672)).unwrap_err();
        assert_eq!(
            err,
            SizingError::DivisionByZero {
                field: "stop_loss_size"
            }
        );
    }

    #[test]
    fn test_zero_pip_value_is_division_by_zero() {
        let err = PositionSizer::compute(&input(50.0, 1.0, 2.0, 0.0, 4.0, 1.4672)).unwrap_err();
        assert_eq!(err, SizingError::DivisionByZero { field: "pip_value" });
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PositionSizer::compute(&input(bad, 1.0, 2.0, 10.0, 4.0, 1.0)).unwrap_err();
            assert!(matches!(
                err,
                SizingError::InvalidInput {
                    field: "account_balance",
                    ..
                }
            ));

            let err = PositionSizer::compute(&input(50.0, 1.0, 2.0, 10.0, 4.0, bad)).unwrap_err();
            assert!(matches!(
                err,
                SizingError::InvalidInput {
                    field: "entry_price",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        // Negative balance
        let err = PositionSizer::compute(&input(-50.0, 1.0, 2.0, 10.0, 4.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "account_balance",
                ..
            }
        ));

        // Risk percentage above 100
        let err = PositionSizer::compute(&input(50.0, 101.0, 2.0, 10.0, 4.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "risk_percentage",
                ..
            }
        ));

        // Negative stop-loss
        let err = PositionSizer::compute(&input(50.0, 1.0, -2.0, 10.0, 4.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "stop_loss_size",
                ..
            }
        ));

        // Zero risk/reward
        let err = PositionSizer::compute(&input(50.0, 1.0, 2.0, 10.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "risk_reward",
                ..
            }
        ));
    }

    #[test]
    fn test_price_levels() {
        let input = input(50.0, 1.0, 2.0, 10.0, 4.0, 1.4672);
        let output = PositionSizer::compute(&input).unwrap();
        let levels = PositionSizer::price_levels(&input, &output);

        // Offsets are the dollar distances scaled by the position size:
        // 2 * 10 * 0.025 = 0.5 down, 8 * 10 * 0.025 = 2.0 up.
        assert!((levels.stop_loss_price - (1.4672 - 0.5)).abs() < EPS);
        assert!((levels.take_profit_price - (1.4672 + 2.0)).abs() < EPS);
        assert!(levels.stop_loss_price < input.entry_price);
        assert!(levels.take_profit_price > input.entry_price);
    }
}
