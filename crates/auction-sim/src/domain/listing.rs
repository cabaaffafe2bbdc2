//! Listing - the single item under sale

use super::{AgentId, Price};

/// The item being auctioned and its current best bid.
///
/// `highest_bid` only moves through [`Listing::propose_bid`], and only upward.
/// The coordinator owns the listing and lends it mutably to the seller alone.
#[derive(Debug, Clone)]
pub struct Listing {
    name: String,
    starting_price: Price,
    reserve_price: Price,
    reserve_locked: bool,
    highest_bid: Price,
    highest_bidder: Option<AgentId>,
}

impl Listing {
    /// Create a listing; the highest bid starts at the starting price with no bidder
    pub fn new(name: impl Into<String>, starting_price: Price, reserve_price: Price) -> Self {
        Self {
            name: name.into(),
            starting_price,
            reserve_price,
            reserve_locked: false,
            highest_bid: starting_price,
            highest_bidder: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting_price(&self) -> Price {
        self.starting_price
    }

    pub fn reserve_price(&self) -> Price {
        self.reserve_price
    }

    pub fn highest_bid(&self) -> Price {
        self.highest_bid
    }

    pub fn highest_bidder(&self) -> Option<AgentId> {
        self.highest_bidder
    }

    /// Accept `amount` from `bidder` iff it strictly beats the current highest bid.
    ///
    /// Returns whether the bid was accepted. Rejected bids leave the listing untouched.
    pub fn propose_bid(&mut self, amount: Price, bidder: AgentId) -> bool {
        if amount > self.highest_bid {
            self.highest_bid = amount;
            self.highest_bidder = Some(bidder);
            true
        } else {
            false
        }
    }

    /// Overwrite the reserve price. Only the first call takes effect.
    pub fn set_reserve_price(&mut self, price: Price) -> bool {
        if self.reserve_locked {
            return false;
        }
        self.reserve_price = price;
        self.reserve_locked = true;
        true
    }

    /// Whether the current highest bid meets the reserve
    pub fn reserve_met(&self) -> bool {
        self.highest_bid >= self.reserve_price
    }
}
