//! Buyer Agent
//!
//! Holds a budget and a private maximum bid. Each round it raises over the
//! seller's ask by a small increment while the ask is above its committed
//! maximum, and it answers `CurrentPrice` broadcasts by matching the price when
//! it can afford to. Bids only ever reach the listing through `Bid` messages.

use super::{Agent, AuctionView, IncrementSource};
use crate::domain::{AgentId, BuyerReport, BuyerStatus, Message, Price};
use crate::error::PolicyViolation;
use rust_decimal::Decimal;

/// Buyer agent
#[derive(Debug, Clone)]
pub struct Buyer {
    id: AgentId,
    name: String,
    budget: Price,
    max_bid: Price,
    round: u32,
    violation: Option<PolicyViolation>,
}

impl Buyer {
    pub fn new(id: AgentId, name: impl Into<String>, budget: Price) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
            max_bid: Decimal::ZERO,
            round: 0,
            violation: None,
        }
    }

    pub fn budget(&self) -> Price {
        self.budget
    }

    /// Highest bid this buyer has committed to so far
    pub fn max_bid(&self) -> Price {
        self.max_bid
    }

    pub fn is_disqualified(&self) -> bool {
        self.violation.is_some()
    }

    /// The violation that got this buyer disqualified, if any
    pub fn violation(&self) -> Option<&PolicyViolation> {
        self.violation.as_ref()
    }

    pub fn status(&self) -> BuyerStatus {
        if self.is_disqualified() {
            BuyerStatus::Disqualified
        } else {
            BuyerStatus::Stopped
        }
    }

    pub fn report(&self) -> BuyerReport {
        BuyerReport {
            id: self.id,
            name: self.name.clone(),
            budget: self.budget,
            max_bid: self.max_bid,
            status: self.status(),
        }
    }

    /// Run one round of bidding.
    ///
    /// Returns the messages to publish, in order. A disqualified buyer, or one
    /// acting after the seller has closed, does nothing.
    pub fn step(&mut self, view: &AuctionView, increments: &mut dyn IncrementSource) -> Vec<Message> {
        if self.is_disqualified() || view.seller_finished {
            return Vec::new();
        }

        if self.round == 0 {
            log::info!("Buyer {}: started. Maximum price = {}", self.name, self.budget);
        }
        self.round += 1;

        let mut outbox = Vec::new();
        if self.round > 1 {
            outbox.push(Message::BidRequest {
                price: view.ask_price,
            });
        }

        let result = self
            .candidate_bid(view, increments)
            .and_then(|candidate| self.submit_bid(candidate, view));
        match result {
            Ok(Some(bid)) => outbox.push(bid),
            Ok(None) => {}
            Err(violation) => {
                self.disqualify(violation);
                return outbox;
            }
        }
        log::debug!("Buyer {}: current price = {}", self.name, self.max_bid);

        // Re-announce the standing bid; the listing ignores it unless it is new
        if self.max_bid > view.ask_price {
            outbox.push(self.bid_message());
        }

        outbox
    }

    /// React to a broadcast message. Returns any messages to publish in reply.
    pub fn on_message(&mut self, message: &Message, view: &AuctionView) -> Vec<Message> {
        if self.is_disqualified() {
            return Vec::new();
        }

        match *message {
            Message::CurrentPrice { price } if price > self.max_bid && price <= self.budget => {
                match self.submit_bid(price.max(self.max_bid), view) {
                    Ok(bid) => bid.into_iter().collect(),
                    Err(violation) => {
                        self.disqualify(violation);
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    /// Try to raise the committed maximum to `price`.
    ///
    /// The price is clamped to the budget first. The raise is accepted only if
    /// it beats our own maximum, the listing's highest bid and the reserve, and
    /// the seller is still open. Returns the `Bid` to publish on acceptance.
    pub fn submit_bid(
        &mut self,
        price: Price,
        view: &AuctionView,
    ) -> Result<Option<Message>, PolicyViolation> {
        if price < Decimal::ZERO {
            return Err(PolicyViolation::NegativeBid { price });
        }
        let price = price.min(self.budget);

        let accepted = price > self.max_bid
            && price > view.highest_bid
            && price > view.reserve_price
            && !view.seller_finished;
        if !accepted {
            return Ok(None);
        }

        self.max_bid = price;
        log::info!("Buyer {} sends bid of {} to seller.", self.name, self.max_bid);
        Ok(Some(self.bid_message()))
    }

    /// Bid to make this round: over the ask if we are below it and can still
    /// afford more, otherwise hold at the current maximum.
    fn candidate_bid(
        &self,
        view: &AuctionView,
        increments: &mut dyn IncrementSource,
    ) -> Result<Price, PolicyViolation> {
        if view.ask_price > self.max_bid && self.max_bid < self.budget {
            let increment = increments.next_increment();
            if increment <= Decimal::ZERO {
                return Err(PolicyViolation::NonPositiveIncrement { increment });
            }
            // Past Decimal::MAX the raise is capped by the budget clamp anyway
            Ok(view.ask_price.checked_add(increment).unwrap_or(Decimal::MAX))
        } else {
            Ok(self.max_bid)
        }
    }

    fn disqualify(&mut self, violation: PolicyViolation) {
        log::warn!("Buyer {}: disqualified ({})", self.name, violation);
        self.violation = Some(violation);
    }

    fn bid_message(&self) -> Message {
        Message::Bid {
            price: self.max_bid,
            buyer: self.id,
        }
    }
}

impl Agent for Buyer {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn agent_type(&self) -> &'static str {
        "Buyer"
    }
}
