//! Auction results

use super::{AgentId, Price};
use serde::Serialize;

/// A completed sale as decided by the seller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sale {
    pub winner: AgentId,
    pub price: Price,
}

/// Final outcome of the auction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum Outcome {
    Sold { winner: String, price: Price },
    Unsold,
}

impl Outcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, Outcome::Sold { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Sold { winner, price } => write!(f, "sold to {} for {}", winner, price),
            Outcome::Unsold => write!(f, "not sold, no bid met the reserve price"),
        }
    }
}

/// Final status of a buyer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BuyerStatus {
    /// Took part until the end (or ran out of budget)
    Stopped,
    /// Excluded after a policy violation
    Disqualified,
}

impl std::fmt::Display for BuyerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuyerStatus::Stopped => write!(f, "stopped"),
            BuyerStatus::Disqualified => write!(f, "disqualified"),
        }
    }
}

/// Per-buyer final state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerReport {
    pub id: AgentId,
    pub name: String,
    pub budget: Price,
    pub max_bid: Price,
    pub status: BuyerStatus,
}

/// Everything the caller needs once the auction is over
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionReport {
    /// Item name
    pub item: String,
    /// Sold or unsold
    pub outcome: Outcome,
    /// Rounds executed by the coordinator
    pub rounds: u32,
    /// Seller's opening ask
    pub starting_price: Price,
    /// Reserve price in force at the end
    pub reserve_price: Price,
    /// Highest bid recorded on the listing
    pub highest_bid: Price,
    /// Seller's ask price after each round
    pub price_history: Vec<Price>,
    /// Buyers in roster order
    pub buyers: Vec<BuyerReport>,
}

impl AuctionReport {
    /// Report for a buyer by name
    pub fn buyer(&self, name: &str) -> Option<&BuyerReport> {
        self.buyers.iter().find(|b| b.name == name)
    }
}
