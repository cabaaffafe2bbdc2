//! Domain layer: the item under sale, the broadcast vocabulary, and results

mod listing;
mod message;
mod report;

pub use listing::Listing;
pub use message::Message;
pub use report::{AuctionReport, BuyerReport, BuyerStatus, Outcome, Sale};

/// Monetary amount. Bids, budgets and prices share one decimal type.
pub type Price = rust_decimal::Decimal;

/// Unique identifier for an agent (seller or buyer)
///
/// Assigned in roster order at setup: the seller is `1`, buyers follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct AgentId(pub u32);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
