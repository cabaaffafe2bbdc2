//! Agent Framework
//!
//! The two roles taking part in an auction:
//!
//! - **Seller**: sole writer of the listing; reconciles standing bids every
//!   second round, publishes the ask price and closes the auction
//! - **Buyer**: raises its private maximum bid toward its budget and proposes
//!   it to the seller by broadcast
//!
//! Agents never touch each other's state. Buyers decide from an
//! [`AuctionView`] snapshot; the seller sees buyers only as [`BidStanding`]s.

mod agent;
mod increment;
mod view;

pub use agent::Agent;
pub use increment::{FixedIncrement, IncrementSource, UniformIncrement};
pub use view::{AuctionView, BidStanding};

pub mod buyer;
pub mod seller;

pub use buyer::Buyer;
pub use seller::{Seller, SellerPhase};
