//! Auction errors

use crate::domain::Price;
use thiserror::Error;

/// Invalid setup input. Reported before any round executes.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Auction length must be at least one round")]
    ZeroLengthAuction,

    #[error("{field} must be non-negative, got {value}")]
    NegativePrice { field: &'static str, value: Price },

    #[error("Auction needs at least one buyer")]
    NoBuyers,

    #[error("Buyer #{index} has an empty name")]
    EmptyBuyerName { index: usize },

    #[error("Buyer {name} has a negative budget: {budget}")]
    NegativeBudget { name: String, budget: Price },

    #[error("Invalid bid increment range: min={min}, max={max}")]
    InvalidIncrementRange { min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// A buyer's bidding logic broke a rule that is enforced strictly.
///
/// Recovered locally: the buyer is disqualified and the auction carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("negative bid: {price}")]
    NegativeBid { price: Price },

    #[error("bid increment must be positive, got {increment}")]
    NonPositiveIncrement { increment: Price },
}
