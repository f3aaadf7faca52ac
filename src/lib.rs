//! Core library for the lotsizer position-size calculator.
//!
//! The calculation is a pure function over a small input record; the CLI
//! in `main.rs` only parses flags, resolves the pair name, and renders
//! the returned fields.

pub mod error;
pub mod models;
pub mod sizing;

pub use error::SizingError;
pub use models::{CalculatorInput, CalculatorOutput, CurrencyPair, PriceLevels};
pub use sizing::{PairTable, PositionSizer};
