//! Simulation Framework
//!
//! Provides the round loop and message delivery for an auction run.
//!
//! # Architecture
//!
//! The coordinator drives:
//! - Activation of every active agent once per round
//! - Synchronous, depth-first broadcast delivery in roster order
//! - Seller termination and roster removal
//! - Final reporting

mod coordinator;

pub use coordinator::{Auction, RoundSummary};
