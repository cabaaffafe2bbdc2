//! Seller Agent
//!
//! The only writer of the listing. Opens the auction on its first round,
//! reconciles every buyer's standing bid on even rounds and publishes the
//! resulting ask price, and closes the auction once its round counter reaches
//! the auction length.

use super::{Agent, BidStanding};
use crate::domain::{AgentId, Listing, Message, Price, Sale};
use crate::infrastructure::config::ReservePolicy;

/// Seller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerPhase {
    NotStarted,
    Running,
    /// Terminal
    Finished,
}

/// Seller agent
#[derive(Debug, Clone)]
pub struct Seller {
    id: AgentId,
    ask_price: Price,
    round: u32,
    auction_length: u32,
    reserve_policy: ReservePolicy,
    phase: SellerPhase,
    sale: Option<Sale>,
}

impl Seller {
    pub fn new(
        id: AgentId,
        starting_price: Price,
        auction_length: u32,
        reserve_policy: ReservePolicy,
    ) -> Self {
        Self {
            id,
            ask_price: starting_price,
            round: 0,
            auction_length,
            reserve_policy,
            phase: SellerPhase::NotStarted,
            sale: None,
        }
    }

    /// Current ask price
    pub fn ask_price(&self) -> Price {
        self.ask_price
    }

    pub fn phase(&self) -> SellerPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SellerPhase::Finished
    }

    /// The sale decided at close. `None` while running or if the item went unsold.
    pub fn sale(&self) -> Option<Sale> {
        self.sale
    }

    /// Run one round. Returns the messages to publish.
    ///
    /// Termination is checked separately by [`Seller::close_if_due`], after the
    /// round's messages have been delivered.
    pub fn step(&mut self, listing: &mut Listing, standings: &[BidStanding]) -> Vec<Message> {
        if self.is_finished() {
            return Vec::new();
        }

        if self.round == 0 {
            log::info!("Vendor started.");
        }
        self.round += 1;

        if self.round == 1 {
            self.phase = SellerPhase::Running;
            log::info!(
                "Seller: Offer a price for the item for sale (reserve price): {}",
                self.ask_price
            );
            if self.reserve_policy == ReservePolicy::OpeningAsk
                && listing.set_reserve_price(self.ask_price)
            {
                log::debug!("Seller: reserve price set to opening ask {}", self.ask_price);
            }
            Vec::new()
        } else if self.round % 2 == 0 {
            log::info!("Seller is considering bids");
            self.ask_price = Self::reconcile(listing, standings);
            log::info!(
                "Seller is sending current price of {} to all buyers",
                self.ask_price
            );
            vec![Message::CurrentPrice {
                price: self.ask_price,
            }]
        } else {
            Vec::new()
        }
    }

    /// Handle a broadcast message. Bids are proposed to the listing.
    pub fn on_message(&mut self, message: &Message, listing: &mut Listing) {
        if self.is_finished() {
            return;
        }

        if let Message::Bid { price, buyer } = *message {
            let accepted = listing.propose_bid(price, buyer);
            log::info!(
                "Seller {} received bid of {} from buyer {}{}",
                self.id,
                price,
                buyer,
                if accepted { "" } else { " (not above highest)" }
            );
        }
    }

    /// Close the auction if this was the final round.
    ///
    /// Returns `true` exactly once, on the round the seller finishes.
    pub fn close_if_due(&mut self, listing: &Listing) -> bool {
        if self.is_finished() || self.round != self.auction_length {
            return false;
        }

        self.sale = match listing.highest_bidder() {
            Some(winner) if listing.reserve_met() => Some(Sale {
                winner,
                price: listing.highest_bid(),
            }),
            _ => None,
        };

        match self.sale {
            Some(sale) => log::info!(
                "Seller: Auction over. Object sold to buyer {} for {}.",
                sale.winner,
                sale.price
            ),
            None => log::info!("Seller: Auction over. Item not sold as no bid met reserve price."),
        }

        self.phase = SellerPhase::Finished;
        true
    }

    /// Best standing bid: start from the listing, adopt any strictly higher
    /// maximum in roster order (earliest buyer wins ties), write it back.
    fn reconcile(listing: &mut Listing, standings: &[BidStanding]) -> Price {
        let mut best: Option<BidStanding> = None;
        let mut highest = listing.highest_bid();

        for standing in standings {
            if standing.max_bid > highest {
                highest = standing.max_bid;
                best = Some(*standing);
            }
        }

        if let Some(best) = best {
            listing.propose_bid(best.max_bid, best.buyer);
        }
        listing.highest_bid()
    }
}

impl Agent for Seller {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        "Seller"
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn agent_type(&self) -> &'static str {
        "Seller"
    }
}
