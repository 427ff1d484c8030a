use serde::{Deserialize, Serialize};

use super::exchange::ExchangeListing;

/// Identifier the market data provider uses for Bitcoin
pub const BITCOIN_ID: &str = "bitcoin";

/// Notional trade sizes (in USD) at which slippage is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlippageTier {
    Usd100,
    Usd1K,
    Usd10K,
    Usd100K,
    Usd1M,
}

impl SlippageTier {
    pub const ALL: [SlippageTier; 5] = [
        SlippageTier::Usd100,
        SlippageTier::Usd1K,
        SlippageTier::Usd10K,
        SlippageTier::Usd100K,
        SlippageTier::Usd1M,
    ];

    /// Map a raw notional to its tier, `None` for sizes that are not tracked
    pub fn from_usd(usd: u32) -> Option<Self> {
        match usd {
            100 => Some(Self::Usd100),
            1_000 => Some(Self::Usd1K),
            10_000 => Some(Self::Usd10K),
            100_000 => Some(Self::Usd100K),
            1_000_000 => Some(Self::Usd1M),
            _ => None,
        }
    }

    pub fn usd(self) -> u32 {
        match self {
            Self::Usd100 => 100,
            Self::Usd1K => 1_000,
            Self::Usd10K => 10_000,
            Self::Usd100K => 100_000,
            Self::Usd1M => 1_000_000,
        }
    }
}

/// A tradable token with aggregate market data
///
/// Slippage figures are fractions of the trade notional (0.02 = 2%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,

    // Market data
    #[serde(default)]
    pub market_cap_usd: Option<f64>,
    #[serde(default)]
    pub volume_24h_usd: Option<f64>,
    #[serde(default)]
    pub exchanges_data: Vec<ExchangeListing>,

    // Tokenomics
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,

    // Aggregate slippage per notional
    #[serde(default)]
    pub slippage_100: Option<f64>,
    #[serde(default)]
    pub slippage_1000: Option<f64>,
    #[serde(default)]
    pub slippage_10000: Option<f64>,
    #[serde(default)]
    pub slippage_100000: Option<f64>,
    #[serde(default)]
    pub slippage_1000000: Option<f64>,
}

impl Asset {
    pub fn is_bitcoin(&self) -> bool {
        self.id == BITCOIN_ID
    }

    /// Asset-wide slippage recorded for the given tier
    pub fn slippage_at(&self, tier: SlippageTier) -> Option<f64> {
        match tier {
            SlippageTier::Usd100 => self.slippage_100,
            SlippageTier::Usd1K => self.slippage_1000,
            SlippageTier::Usd10K => self.slippage_10000,
            SlippageTier::Usd100K => self.slippage_100000,
            SlippageTier::Usd1M => self.slippage_1000000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_usd() {
        for tier in SlippageTier::ALL {
            assert_eq!(SlippageTier::from_usd(tier.usd()), Some(tier));
        }
        assert_eq!(SlippageTier::from_usd(50_000), None);
    }

    #[test]
    fn test_slippage_at() {
        let asset = Asset {
            id: "ethereum".to_string(),
            slippage_100: Some(0.001),
            slippage_10000: Some(0.01),
            slippage_1000000: Some(0.2),
            ..Default::default()
        };

        assert_eq!(asset.slippage_at(SlippageTier::Usd100), Some(0.001));
        assert_eq!(asset.slippage_at(SlippageTier::Usd1K), None);
        assert_eq!(asset.slippage_at(SlippageTier::Usd10K), Some(0.01));
        assert_eq!(asset.slippage_at(SlippageTier::Usd100K), None);
        assert_eq!(asset.slippage_at(SlippageTier::Usd1M), Some(0.2));
    }

    #[test]
    fn test_is_bitcoin() {
        let btc = Asset {
            id: BITCOIN_ID.to_string(),
            ..Default::default()
        };
        let wbtc = Asset {
            id: "wrapped-bitcoin".to_string(),
            ..Default::default()
        };

        assert!(btc.is_bitcoin());
        assert!(!wbtc.is_bitcoin());
    }

    #[test]
    fn test_deserialize_sparse_asset() {
        let asset: Asset = serde_json::from_str(r#"{ "id": "dogecoin" }"#).unwrap();

        assert_eq!(asset.id, "dogecoin");
        assert!(asset.exchanges_data.is_empty());
        assert_eq!(asset.market_cap_usd, None);
        assert_eq!(asset.slippage_1000000, None);
    }
}
