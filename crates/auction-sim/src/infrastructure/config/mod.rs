//! Configuration loading for the auction simulator
//!
//! Supports JSON configuration files for:
//! - Auction length and item prices
//! - Buyer roster (name and budget, in roster order)
//! - Scheduling and reserve-price policies
//! - Bid increment range and random seed

use crate::domain::Price;
use crate::error::{ConfigError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order in which agents are stepped within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationOrder {
    /// Seller first, then buyers in roster order
    #[default]
    SellerFirst,
    /// Whole roster shuffled every round from the seeded RNG
    Random,
}

/// What happens to the configured reserve price when the seller opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReservePolicy {
    /// Round 1 replaces the reserve with the seller's opening ask
    #[default]
    OpeningAsk,
    /// Keep the reserve given in the configuration
    Configured,
}

/// A buyer in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerConfig {
    pub name: String,
    pub budget: Price,
}

impl BuyerConfig {
    pub fn new(name: impl Into<String>, budget: Price) -> Self {
        Self {
            name: name.into(),
            budget,
        }
    }
}

/// Inclusive range for random bid increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementConfig {
    pub min: u32,
    pub max: u32,
}

impl Default for IncrementConfig {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

/// Root configuration for an auction run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionConfig {
    /// Name of the item for sale
    #[serde(default = "default_item_name")]
    pub item_name: String,

    /// Number of rounds before the seller closes
    pub auction_length: u32,

    /// Seller's opening ask
    pub starting_price: Price,

    /// Minimum winning bid
    pub reserve_price: Price,

    /// Buyers in roster order
    pub buyers: Vec<BuyerConfig>,

    #[serde(default)]
    pub activation: ActivationOrder,

    #[serde(default)]
    pub reserve_policy: ReservePolicy,

    #[serde(default)]
    pub increment: IncrementConfig,

    /// Random seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_item_name() -> String {
    "Test Product".to_string()
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            item_name: default_item_name(),
            auction_length: 10,
            starting_price: Decimal::from(80),
            reserve_price: Decimal::from(100),
            buyers: vec![
                BuyerConfig::new("James", Decimal::from(100)),
                BuyerConfig::new("Kylie", Decimal::from(150)),
                BuyerConfig::new("Jorge", Decimal::from(200)),
                BuyerConfig::new("Emma", Decimal::from(120)),
            ],
            activation: ActivationOrder::default(),
            reserve_policy: ReservePolicy::default(),
            increment: IncrementConfig::default(),
            seed: None,
        }
    }
}

impl AuctionConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load the embedded reference scenario
    pub fn load_default() -> Result<Self> {
        Self::from_json(include_str!("default_auction.json"))
    }

    /// Validate setup input. Nothing runs until this passes.
    pub fn validate(&self) -> Result<()> {
        if self.auction_length == 0 {
            return Err(ConfigError::ZeroLengthAuction);
        }
        if self.starting_price < Decimal::ZERO {
            return Err(ConfigError::NegativePrice {
                field: "startingPrice",
                value: self.starting_price,
            });
        }
        if self.reserve_price < Decimal::ZERO {
            return Err(ConfigError::NegativePrice {
                field: "reservePrice",
                value: self.reserve_price,
            });
        }
        if self.buyers.is_empty() {
            return Err(ConfigError::NoBuyers);
        }
        for (index, buyer) in self.buyers.iter().enumerate() {
            if buyer.name.trim().is_empty() {
                return Err(ConfigError::EmptyBuyerName { index });
            }
            if buyer.budget < Decimal::ZERO {
                return Err(ConfigError::NegativeBudget {
                    name: buyer.name.clone(),
                    budget: buyer.budget,
                });
            }
        }
        let IncrementConfig { min, max } = self.increment;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidIncrementRange { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_default_matches_default_impl() {
        let loaded = AuctionConfig::load_default().unwrap();
        let built = AuctionConfig::default();

        assert_eq!(loaded.auction_length, built.auction_length);
        assert_eq!(loaded.starting_price, built.starting_price);
        assert_eq!(loaded.reserve_price, built.reserve_price);
        assert_eq!(loaded.buyers, built.buyers);
        assert_eq!(loaded.activation, ActivationOrder::SellerFirst);
        assert_eq!(loaded.reserve_policy, ReservePolicy::OpeningAsk);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{
            "auctionLength": 4,
            "startingPrice": 500,
            "reservePrice": 500,
            "buyers": [{ "name": "A", "budget": 10 }, { "name": "B", "budget": "20.5" }]
        }"#;
        let config = AuctionConfig::from_json(json).unwrap();

        assert_eq!(config.item_name, "Test Product");
        assert_eq!(config.buyers[1].budget, dec!(20.5));
        assert_eq!(config.increment, IncrementConfig { min: 1, max: 10 });
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policies_parse() {
        let json = r#"{
            "auctionLength": 3,
            "startingPrice": 1,
            "reservePrice": 2,
            "buyers": [{ "name": "A", "budget": 10 }],
            "activation": "random",
            "reservePolicy": "configured",
            "seed": 7
        }"#;
        let config = AuctionConfig::from_json(json).unwrap();
        assert_eq!(config.activation, ActivationOrder::Random);
        assert_eq!(config.reserve_policy, ReservePolicy::Configured);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = AuctionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AuctionConfig::from_file("/nonexistent/auction.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_setup() {
        let mut config = AuctionConfig::default();
        config.auction_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroLengthAuction)
        ));

        let mut config = AuctionConfig::default();
        config.buyers.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoBuyers)));

        let mut config = AuctionConfig::default();
        config.buyers[2].budget = dec!(-1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeBudget { ref name, .. }) if name == "Jorge"
        ));

        let mut config = AuctionConfig::default();
        config.reserve_price = dec!(-5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativePrice {
                field: "reservePrice",
                ..
            })
        ));

        let mut config = AuctionConfig::default();
        config.buyers[0].name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBuyerName { index: 0 })
        ));

        let mut config = AuctionConfig::default();
        config.increment = IncrementConfig { min: 5, max: 2 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIncrementRange { min: 5, max: 2 })
        ));
    }

    #[test]
    fn test_zero_budget_is_valid() {
        let mut config = AuctionConfig::default();
        config.buyers.push(BuyerConfig::new("Broke", dec!(0)));
        assert!(config.validate().is_ok());
    }
}
