//! Broadcast messages

use super::{AgentId, Price};

/// Messages published on the auction's broadcast channel.
///
/// Every active agent receives every message; each role ignores the kinds it
/// has no handler for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A buyer's standing bid, proposed to the seller
    Bid { price: Price, buyer: AgentId },
    /// The seller's reconciled ask price
    CurrentPrice { price: Price },
    /// A buyer asking for the current price (informational)
    BidRequest { price: Price },
}

impl Message {
    /// Message kind name (for logging)
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Bid { .. } => "bid",
            Message::CurrentPrice { .. } => "current price",
            Message::BidRequest { .. } => "bid request",
        }
    }
}
