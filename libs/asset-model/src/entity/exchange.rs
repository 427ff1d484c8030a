use serde::{Deserialize, Serialize};

use super::asset::SlippageTier;

/// Quality rating attached to an exchange by the upstream rater
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeScore {
    #[serde(default)]
    pub total_score: Option<f64>,
}

/// Trading venue reference data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trust_score: Option<f64>,
    #[serde(default)]
    pub score: Option<ExchangeScore>,
}

impl Exchange {
    /// Nested `score.total_score`, if the exchange has been rated
    pub fn total_score(&self) -> Option<f64> {
        self.score.as_ref().and_then(|s| s.total_score)
    }
}

/// One asset listed on one exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeListing {
    pub exchange: Exchange,
    /// Coarse quality label assigned to the pair, e.g. "green"
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub slippage_10000: Option<f64>,
    #[serde(default)]
    pub slippage_100000: Option<f64>,
    #[serde(default)]
    pub slippage_1000000: Option<f64>,
}

impl ExchangeListing {
    /// Venue slippage for the given tier. Listings only record the
    /// $10k, $100k and $1M tiers.
    pub fn slippage_at(&self, tier: SlippageTier) -> Option<f64> {
        match tier {
            SlippageTier::Usd100 | SlippageTier::Usd1K => None,
            SlippageTier::Usd10K => self.slippage_10000,
            SlippageTier::Usd100K => self.slippage_100000,
            SlippageTier::Usd1M => self.slippage_1000000,
        }
    }
}
