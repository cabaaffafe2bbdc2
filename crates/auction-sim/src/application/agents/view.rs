//! Read-only state handed to agents

use crate::domain::{AgentId, Price};

/// What a buyer may observe when it acts: the seller's published ask and the
/// public state of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionView {
    /// Seller's current ask price
    pub ask_price: Price,
    /// Highest bid accepted into the listing
    pub highest_bid: Price,
    /// Reserve price in force
    pub reserve_price: Price,
    /// Whether the seller has closed the auction
    pub seller_finished: bool,
}

/// A buyer's committed maximum bid, as seen by the seller during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidStanding {
    pub buyer: AgentId,
    pub max_bid: Price,
}
