//! Round-synchronized ascending auction simulation
//!
//! One seller and N buyers advance through discrete rounds in lockstep and talk
//! to each other only through broadcast messages. The seller is the single
//! writer of the shared [`Listing`]; buyers propose bids by message.
//!
//! ## Architecture
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │      Auction (coordinator)   │
//!              │  roster · round loop · bus   │
//!              └───────┬──────────────┬───────┘
//!        step / deliver│              │step / deliver
//!                      ▼              ▼
//!              ┌──────────────┐  ┌──────────────┐
//!              │    Seller    │  │   Buyers     │
//!              │ reconcile,   │  │ raise bids,  │
//!              │ terminate    │  │ react to ask │
//!              └──────┬───────┘  └──────────────┘
//!                     │ &mut (exclusive)
//!                     ▼
//!              ┌──────────────┐
//!              │   Listing    │
//!              └──────────────┘
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export key types at crate root
pub use application::agents::{
    Agent, AuctionView, BidStanding, Buyer, FixedIncrement, IncrementSource, Seller, SellerPhase,
    UniformIncrement,
};
pub use application::simulation::{Auction, RoundSummary};
pub use domain::{
    AgentId, AuctionReport, BuyerReport, BuyerStatus, Listing, Message, Outcome, Price, Sale,
};
pub use error::{ConfigError, PolicyViolation};
pub use infrastructure::config::{
    ActivationOrder, AuctionConfig, BuyerConfig, IncrementConfig, ReservePolicy,
};
