//! Application layer: agents and orchestration
//!
//! Contains:
//! - **agents**: Seller and buyer behavior, the view buyers act on, bid increments
//! - **simulation**: The `Auction` coordinator that runs the round loop

pub mod agents;
pub mod simulation;
