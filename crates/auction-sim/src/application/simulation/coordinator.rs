//! Auction Coordinator
//!
//! Owns the listing, the ordered roster and the broadcast channel, and runs
//! the round loop until the seller closes.

use crate::application::agents::{
    Agent, AuctionView, BidStanding, Buyer, IncrementSource, Seller, UniformIncrement,
};
use crate::domain::{AgentId, AuctionReport, Listing, Message, Outcome, Price};
use crate::error::Result;
use crate::infrastructure::config::{ActivationOrder, AuctionConfig};
use rand::prelude::*;

const SELLER_ID: AgentId = AgentId(1);

/// Result of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number (1-based)
    pub round: u32,
    /// Seller's ask price after the round
    pub ask_price: Price,
    /// Listing's highest bid after the round
    pub highest_bid: Price,
    /// Listing's highest bidder after the round
    pub highest_bidder: Option<AgentId>,
    /// Messages delivered during the round, replies included
    pub messages_delivered: usize,
}

/// The auction coordinator
pub struct Auction {
    config: AuctionConfig,
    listing: Listing,
    seller: Seller,
    buyers: Vec<Buyer>,
    /// Active agents in roster order
    roster: Vec<AgentId>,
    increments: Box<dyn IncrementSource>,
    rng: StdRng,
    round: u32,
    messages_delivered: usize,
    price_history: Vec<Price>,
}

impl Auction {
    /// Create an auction with random increments drawn per the configuration
    pub fn new(config: AuctionConfig) -> Result<Self> {
        let increments = UniformIncrement::new(config.increment, config.seed);
        Self::with_increment_source(config, Box::new(increments))
    }

    /// Create an auction with a caller-supplied increment source
    pub fn with_increment_source(
        config: AuctionConfig,
        increments: Box<dyn IncrementSource>,
    ) -> Result<Self> {
        config.validate()?;

        let listing = Listing::new(
            config.item_name.clone(),
            config.starting_price,
            config.reserve_price,
        );
        let seller = Seller::new(
            SELLER_ID,
            config.starting_price,
            config.auction_length,
            config.reserve_policy,
        );
        let buyers: Vec<Buyer> = config
            .buyers
            .iter()
            .zip(2..)
            .map(|(b, id)| Buyer::new(AgentId(id), b.name.clone(), b.budget))
            .collect();

        let mut roster = Vec::with_capacity(buyers.len() + 1);
        roster.push(SELLER_ID);
        roster.extend(buyers.iter().map(|b| b.id()));

        // Activation shuffling gets its own stream so it does not perturb increments
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        log::debug!(
            "Auction '{}' set up: {} rounds, {} buyers, {:?} activation",
            config.item_name,
            config.auction_length,
            buyers.len(),
            config.activation
        );

        Ok(Self {
            config,
            listing,
            seller,
            buyers,
            roster,
            increments,
            rng,
            round: 0,
            messages_delivered: 0,
            price_history: Vec::new(),
        })
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    pub fn buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    pub fn buyer(&self, id: AgentId) -> Option<&Buyer> {
        self.buyers.iter().find(|b| b.id() == id)
    }

    /// Active agents in roster order
    pub fn roster(&self) -> &[AgentId] {
        &self.roster
    }

    /// Rounds executed so far
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether the run is over: the seller closed, or left the roster early
    pub fn is_finished(&self) -> bool {
        self.seller.is_finished() || !self.is_active(SELLER_ID)
    }

    pub fn is_active(&self, id: AgentId) -> bool {
        self.roster.contains(&id)
    }

    /// Take the seller off the roster. No-op if already absent.
    pub fn remove_seller(&mut self) {
        self.remove_agent(SELLER_ID);
    }

    /// Take a buyer off the roster. No-op if already absent.
    pub fn remove_buyer(&mut self, id: AgentId) {
        if id != SELLER_ID {
            self.remove_agent(id);
        }
    }

    /// Deliver `message` to every active agent in roster order.
    ///
    /// Delivery is synchronous and depth-first: replies a recipient produces
    /// are delivered to everyone before the next recipient sees `message`.
    pub fn broadcast(&mut self, message: Message) {
        if let Message::Bid { buyer, .. } = message {
            if buyer == SELLER_ID || !self.is_active(buyer) || self.buyer(buyer).is_none() {
                log::warn!("Dropping bid from agent {} (not an active buyer)", buyer);
                return;
            }
        }

        self.messages_delivered += 1;
        log::trace!("broadcast {}: {:?}", message.kind(), message);

        let recipients = self.roster.clone();
        for id in recipients {
            if !self.is_active(id) {
                continue;
            }

            if id == SELLER_ID {
                self.seller.on_message(&message, &mut self.listing);
                continue;
            }

            let view = self.view();
            let replies = match self.buyers.iter_mut().find(|b| b.id() == id) {
                Some(buyer) => buyer.on_message(&message, &view),
                None => continue,
            };
            for reply in replies {
                self.broadcast(reply);
            }
        }
    }

    /// Advance exactly one round.
    ///
    /// Returns `None` without doing anything once the auction is finished.
    pub fn step(&mut self) -> Option<RoundSummary> {
        if self.is_finished() {
            return None;
        }

        self.round += 1;
        self.messages_delivered = 0;

        for id in self.activation_order() {
            if !self.is_active(id) {
                continue;
            }
            if let Some(agent) = self.agent(id) {
                log::trace!(
                    "round {}: {} {} acts",
                    self.round,
                    agent.agent_type(),
                    agent.name()
                );
            }

            if id == SELLER_ID {
                self.step_seller();
            } else {
                self.step_buyer(id);
            }
        }

        self.price_history.push(self.seller.ask_price());

        let summary = RoundSummary {
            round: self.round,
            ask_price: self.seller.ask_price(),
            highest_bid: self.listing.highest_bid(),
            highest_bidder: self.listing.highest_bidder(),
            messages_delivered: self.messages_delivered,
        };
        log::debug!(
            "Round {} done: ask={}, highest={}, messages={}",
            summary.round,
            summary.ask_price,
            summary.highest_bid,
            summary.messages_delivered
        );

        Some(summary)
    }

    /// Step until the seller finishes, then report
    pub fn run(&mut self) -> AuctionReport {
        while self.step().is_some() {}
        self.report()
    }

    /// Snapshot of the auction's results so far
    pub fn report(&self) -> AuctionReport {
        let outcome = match self.seller.sale() {
            Some(sale) => Outcome::Sold {
                winner: self
                    .buyer(sale.winner)
                    .map(|b| b.name().to_string())
                    .unwrap_or_else(|| sale.winner.to_string()),
                price: sale.price,
            },
            None => Outcome::Unsold,
        };

        AuctionReport {
            item: self.listing.name().to_string(),
            outcome,
            rounds: self.round,
            starting_price: self.listing.starting_price(),
            reserve_price: self.listing.reserve_price(),
            highest_bid: self.listing.highest_bid(),
            price_history: self.price_history.clone(),
            buyers: self.buyers.iter().map(Buyer::report).collect(),
        }
    }

    fn step_seller(&mut self) {
        let standings = self.standings();
        let outbox = self.seller.step(&mut self.listing, &standings);
        for message in outbox {
            self.broadcast(message);
        }

        if self.seller.close_if_due(&self.listing) {
            self.remove_seller();
        }
    }

    fn step_buyer(&mut self, id: AgentId) {
        let view = self.view();
        let increments = self.increments.as_mut();
        let outbox = match self.buyers.iter_mut().find(|b| b.id() == id) {
            Some(buyer) => buyer.step(&view, increments),
            None => return,
        };
        for message in outbox {
            self.broadcast(message);
        }
    }

    fn activation_order(&mut self) -> Vec<AgentId> {
        let mut order = self.roster.clone();
        if self.config.activation == ActivationOrder::Random {
            order.shuffle(&mut self.rng);
        }
        order
    }

    fn view(&self) -> AuctionView {
        AuctionView {
            ask_price: self.seller.ask_price(),
            highest_bid: self.listing.highest_bid(),
            reserve_price: self.listing.reserve_price(),
            seller_finished: self.seller.is_finished(),
        }
    }

    /// Standing bids of active, eligible buyers in roster order
    fn standings(&self) -> Vec<BidStanding> {
        self.roster
            .iter()
            .filter_map(|id| self.buyer(*id))
            .filter(|b| !b.is_disqualified())
            .map(|b| BidStanding {
                buyer: b.id(),
                max_bid: b.max_bid(),
            })
            .collect()
    }

    fn agent(&self, id: AgentId) -> Option<&dyn Agent> {
        if id == SELLER_ID {
            Some(&self.seller as &dyn Agent)
        } else {
            self.buyer(id).map(|b| b as &dyn Agent)
        }
    }

    fn remove_agent(&mut self, id: AgentId) {
        if let Some(pos) = self.roster.iter().position(|a| *a == id) {
            self.roster.remove(pos);
            log::debug!("Agent {} removed from roster", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::agents::FixedIncrement;
    use crate::domain::BuyerStatus;
    use crate::infrastructure::config::BuyerConfig;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn config(length: u32, buyers: &[(&str, Price)]) -> AuctionConfig {
        AuctionConfig {
            auction_length: length,
            starting_price: dec!(80),
            reserve_price: dec!(100),
            buyers: buyers
                .iter()
                .map(|(name, budget)| BuyerConfig::new(*name, *budget))
                .collect(),
            seed: Some(42),
            ..Default::default()
        }
    }

    fn fixed(config: AuctionConfig, inc: Price) -> Auction {
        Auction::with_increment_source(config, Box::new(FixedIncrement(inc))).unwrap()
    }

    #[test]
    fn test_roster_order_follows_ids() {
        let auction = fixed(config(4, &[("A", dec!(10)), ("B", dec!(20))]), dec!(1));
        assert_eq!(auction.roster(), &[AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(auction.buyers()[1].name(), "B");
    }

    #[test]
    fn test_invalid_config_never_starts() {
        assert!(Auction::new(config(0, &[("A", dec!(10))])).is_err());
        assert!(Auction::new(config(3, &[])).is_err());
    }

    #[test]
    fn test_runs_exactly_auction_length_rounds() {
        for length in [1, 2, 3, 7, 10] {
            let mut auction = fixed(config(length, &[("A", dec!(150))]), dec!(3));
            let report = auction.run();
            assert_eq!(report.rounds, length);
            assert_eq!(auction.seller().round(), length);
            assert!(auction.seller().is_finished());
            assert!(auction.step().is_none());
            assert_eq!(auction.round(), length);
        }
    }

    #[test]
    fn test_seller_removed_on_close() {
        let mut auction = fixed(config(2, &[("A", dec!(150))]), dec!(3));
        auction.run();
        assert!(!auction.is_active(AgentId(1)));
        assert!(auction.is_active(AgentId(2)));
    }

    #[test]
    fn test_step_summary_tracks_listing() {
        let mut auction = fixed(config(10, &[("A", dec!(150))]), dec!(5));

        let first = auction.step().unwrap();
        assert_eq!(first.round, 1);
        assert_eq!(first.highest_bid, dec!(85));
        assert_eq!(first.highest_bidder, Some(AgentId(2)));
        // bid + re-announcement
        assert_eq!(first.messages_delivered, 2);

        let second = auction.step().unwrap();
        assert_eq!(second.ask_price, dec!(85));
        assert_eq!(auction.listing().reserve_price(), dec!(80));
    }

    #[test]
    fn test_broadcast_reaches_seller_and_buyers() {
        let mut auction = fixed(config(10, &[("A", dec!(150)), ("B", dec!(150))]), dec!(5));
        auction.step();

        auction.broadcast(Message::Bid {
            price: dec!(140),
            buyer: AgentId(3),
        });
        assert_eq!(auction.listing().highest_bidder(), Some(AgentId(3)));

        // Removed agents stop receiving
        auction.remove_seller();
        auction.broadcast(Message::Bid {
            price: dec!(145),
            buyer: AgentId(2),
        });
        assert_eq!(auction.listing().highest_bid(), dec!(140));
    }

    #[test]
    fn test_bids_from_unknown_or_removed_agents_dropped() {
        let mut auction = fixed(config(10, &[("A", dec!(150)), ("B", dec!(150))]), dec!(5));
        auction.step();
        let before = auction.listing().highest_bid();

        auction.broadcast(Message::Bid {
            price: dec!(500),
            buyer: AgentId(99),
        });
        auction.broadcast(Message::Bid {
            price: dec!(500),
            buyer: AgentId(1),
        });
        auction.remove_buyer(AgentId(3));
        auction.broadcast(Message::Bid {
            price: dec!(500),
            buyer: AgentId(3),
        });

        assert_eq!(auction.listing().highest_bid(), before);
        assert_eq!(auction.listing().highest_bidder(), Some(AgentId(2)));
    }

    #[test]
    fn test_prices_at_decimal_max_run_to_completion() {
        let mut cfg = config(4, &[("Whale", Decimal::MAX)]);
        cfg.starting_price = Decimal::MAX;
        cfg.reserve_price = Decimal::ZERO;
        let report = fixed(cfg, dec!(10)).run();

        assert_eq!(report.rounds, 4);
        assert_eq!(report.starting_price, Decimal::MAX);
        assert_eq!(report.highest_bid, Decimal::MAX);
        assert_eq!(report.outcome, Outcome::Unsold);
    }

    #[test]
    fn test_current_price_replies_delivered_depth_first() {
        let mut auction = fixed(config(10, &[("A", dec!(150)), ("B", dec!(150))]), dec!(5));
        auction.step();

        // A matches 120 first; its bid lands before B sees the same price
        auction.broadcast(Message::CurrentPrice { price: dec!(120) });

        assert_eq!(auction.buyers()[0].max_bid(), dec!(120));
        assert_eq!(auction.listing().highest_bidder(), Some(AgentId(2)));
        assert!(auction.buyers()[1].max_bid() < dec!(120));
    }

    #[test]
    fn test_remove_buyer_is_idempotent() {
        let mut auction = fixed(config(4, &[("A", dec!(10)), ("B", dec!(20))]), dec!(1));
        auction.remove_buyer(AgentId(2));
        auction.remove_buyer(AgentId(2));
        auction.remove_buyer(AgentId(1));
        assert_eq!(auction.roster(), &[AgentId(1), AgentId(3)]);
    }

    #[test]
    fn test_removed_buyer_neither_steps_nor_counts() {
        let mut auction = fixed(config(4, &[("A", dec!(150)), ("B", dec!(150))]), dec!(5));
        auction.remove_buyer(AgentId(2));
        let report = auction.run();

        assert_eq!(report.buyer("A").unwrap().max_bid, Decimal::ZERO);
        assert_eq!(
            report.outcome,
            Outcome::Sold {
                winner: "B".to_string(),
                price: dec!(85)
            }
        );
    }

    #[test]
    fn test_early_seller_removal_ends_unsold() {
        let mut auction = fixed(config(10, &[("A", dec!(150))]), dec!(5));
        auction.step();
        auction.remove_seller();

        assert!(auction.is_finished());
        let report = auction.run();
        assert_eq!(report.rounds, 1);
        assert_eq!(report.outcome, Outcome::Unsold);
    }

    #[test]
    fn test_disqualified_buyer_reported_and_excluded() {
        let cfg = config(4, &[("A", dec!(150)), ("Broke", dec!(0))]);
        let mut auction = Auction::with_increment_source(cfg, Box::new(|| dec!(-2))).unwrap();
        let report = auction.run();

        assert_eq!(report.buyer("A").unwrap().status, BuyerStatus::Disqualified);
        assert_eq!(report.buyer("Broke").unwrap().status, BuyerStatus::Stopped);
        assert_eq!(report.outcome, Outcome::Unsold);
        assert_eq!(report.rounds, 4);
    }

    #[test]
    fn test_random_activation_still_terminates() {
        let mut cfg = config(
            9,
            &[("A", dec!(150)), ("B", dec!(120)), ("C", dec!(200))],
        );
        cfg.activation = ActivationOrder::Random;
        let mut auction = Auction::new(cfg).unwrap();
        let report = auction.run();

        assert_eq!(report.rounds, 9);
        assert_eq!(report.price_history.len(), 9);
        assert!(auction.seller().is_finished());
    }
}
