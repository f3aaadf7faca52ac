//! Forex Position-Size Calculator
//!
//! Turns an account balance, a risk percentage, and a stop-loss distance
//! into a lot size with the associated dollar risk and profit figures.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lotsizer::{CalculatorInput, PairTable, PositionSizer};

/// Position-size calculator CLI.
#[derive(Parser)]
#[command(name = "lotsizer")]
#[command(about = "Compute forex position sizes from account risk", long_about = None)]
struct Cli {
    /// JSON file with a custom currency-pair table
    #[arg(long, env = "LOTSIZER_PAIRS")]
    pairs: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the position size for one trade setup
    Size {
        /// Account balance in dollars
        #[arg(short, long)]
        balance: f64,

        /// Percent of the balance risked on this trade
        #[arg(short, long)]
        risk: f64,

        /// Stop-loss distance in pips
        #[arg(short, long)]
        stop_loss: f64,

        /// Currency pair to trade
        #[arg(short, long, default_value = "EUR/USD")]
        pair: String,

        /// Reward pips per risked pip
        #[arg(long, default_value = "1.0")]
        risk_reward: f64,

        /// Entry quote price (only used for the price levels)
        #[arg(short, long, default_value = "0.0")]
        entry: f64,

        /// Also print stop-loss and take-profit price levels
        #[arg(long)]
        levels: bool,
    },

    /// List the active currency-pair table
    Pairs,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load the pair table: built-in default or a JSON file
    let table = match &cli.pairs {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading pair table {}", path.display()))?;
            let table = PairTable::from_json(&text)?;
            info!(path = %path.display(), pairs = table.len(), "Loaded pair table");
            table
        }
        None => PairTable::default(),
    };

    match cli.command {
        Commands::Size {
            balance,
            risk,
            stop_loss,
            pair,
            risk_reward,
            entry,
            levels,
        } => {
            let selected_pair = table.lookup(&pair)?.clone();
            info!(
                pair = %selected_pair.name,
                pip_value = selected_pair.pip_value,
                "Computing position size"
            );

            let input = CalculatorInput {
                account_balance: balance,
                risk_percentage: risk,
                stop_loss_size: stop_loss,
                selected_pair,
                risk_reward,
                entry_price: entry,
            };

            let output = PositionSizer::compute(&input)?;

            println!("\n=== Position Size ===");
            println!("Position Size: {:.4} lots", output.position_size);
            println!("Risk Amount:   ${:.2}", output.risk_amount);
            println!("Total Risk:    ${:.2}", output.total_risk);
            println!("Profit:        ${:.2}", output.profit);

            if levels {
                let price_levels = PositionSizer::price_levels(&input, &output);
                println!("\n=== Price Levels ===");
                println!("Entry:         {:.5}", input.entry_price);
                println!("Stop Loss:     {:.5}", price_levels.stop_loss_price);
                println!("Take Profit:   {:.5}", price_levels.take_profit_price);
            }
        }

        Commands::Pairs => {
            println!("\n{:<10} {:>12}", "PAIR", "PIP VALUE");
            println!("{}", "-".repeat(23));

            for pair in table.iter() {
                println!("{:<10} {:>12.5}", pair.name, pair.pip_value);
            }
        }
    }

    Ok(())
}
