//! Data models for currency pairs and calculator inputs/outputs.

mod input;
mod output;
mod pair;

pub use input::CalculatorInput;
pub use output::{CalculatorOutput, PriceLevels};
pub use pair::CurrencyPair;
