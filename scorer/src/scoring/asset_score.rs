//! Asset Score Calculator
//!
//! Combines the five component scores into a weighted total. Each component
//! starts at 0 and is only computed when its inputs are present, so a
//! missing component still pulls the total down.

use asset_model::entity::{asset::Asset, score::Score, sentiment::SentimentData};

use super::{liquidity::liquidity_from_slippage, weights::*};

/// Share of the BTC all-time-high volume that counts as a full score for Bitcoin
const BITCOIN_ATH_VOLUME_SHARE: f64 = 0.8;
/// Social score for neutral sentiment
const SOCIAL_BASELINE: f64 = 50.0;
const SOCIAL_MULTIPLIER: f64 = 5.0;

/// Calculator for the composite asset quality score
pub struct AssetScoreCalculator;

impl AssetScoreCalculator {
    /// Calculate the quality score (0-100) for an asset
    ///
    /// `volume_ath_btc` is Bitcoin's all-time-high volume and `volume_btc`
    /// its current volume, both in USD.
    pub fn calculate(
        asset: &Asset,
        sentiment: Option<&SentimentData>,
        volume_ath_btc: Option<f64>,
        volume_btc: Option<f64>,
    ) -> Score {
        let volume_score = Self::volume_score(asset, volume_ath_btc, volume_btc);
        let (exchanges_score, liquidity_score) = Self::listing_scores(asset);
        let supply_score = Self::supply_score(asset);
        let social_score = sentiment.map_or(0.0, Self::social_score);

        let total_score = (FACTOR_VOLUME * volume_score
            + FACTOR_LIQUIDITY * liquidity_score
            + FACTOR_EXCHANGES * exchanges_score
            + FACTOR_SUPPLY * supply_score
            + FACTOR_SOCIAL * social_score)
            / FACTOR_TOTAL;

        Score {
            total_score: round2(total_score),
            volume_score: round2(volume_score),
            liquidity_score: round2(liquidity_score),
            exchanges_score: round2(exchanges_score),
            supply_score: round2(supply_score),
            social_score: round2(social_score),
        }
    }

    /// Volume Score (<= 100)
    ///
    /// Bitcoin is measured against 80% of its all-time-high volume, every
    /// other asset against Bitcoin's current volume. There is no lower bound.
    fn volume_score(asset: &Asset, volume_ath_btc: Option<f64>, volume_btc: Option<f64>) -> f64 {
        let (Some(_), Some(volume), Some(volume_ath_btc), Some(volume_btc)) = (
            truthy(asset.market_cap_usd),
            truthy(asset.volume_24h_usd),
            truthy(volume_ath_btc),
            truthy(volume_btc),
        ) else {
            return 0.0;
        };

        let score = if asset.is_bitcoin() {
            volume / (BITCOIN_ATH_VOLUME_SHARE * volume_ath_btc) * 100.0
        } else {
            volume / volume_btc * 100.0
        };

        score.min(100.0)
    }

    /// Exchange and liquidity scores, both of which need at least one listing
    ///
    /// The exchange score divides by every listing, including those whose
    /// exchange has no rating. Liquidity comes from the asset-wide slippage,
    /// not from individual listings.
    fn listing_scores(asset: &Asset) -> (f64, f64) {
        if asset.exchanges_data.is_empty() {
            return (0.0, 0.0);
        }

        let rated_sum: f64 = asset
            .exchanges_data
            .iter()
            .filter_map(|listing| truthy(listing.exchange.total_score()))
            .sum();
        let exchanges_score = rated_sum / asset.exchanges_data.len() as f64;

        let liquidity_score = liquidity_from_slippage(
            asset.slippage_10000,
            asset.slippage_100000,
            asset.slippage_1000000,
        );

        (exchanges_score, liquidity_score)
    }

    /// Supply Score: circulating share of total supply
    fn supply_score(asset: &Asset) -> f64 {
        match (truthy(asset.circulating_supply), truthy(asset.total_supply)) {
            (Some(circulating), Some(total)) => circulating / total * 100.0,
            _ => 0.0,
        }
    }

    /// Social Score: 50 +/- 50 for inputs within the documented ranges.
    /// Out-of-range inputs are passed through unclamped.
    fn social_score(sentiment: &SentimentData) -> f64 {
        SOCIAL_BASELINE
            + sentiment.weighted_sentiment
                * sentiment.social_volume_normalization_factor
                * SOCIAL_MULTIPLIER
    }
}

/// Calculate the quality score for an asset. See [`AssetScoreCalculator::calculate`].
pub fn compute_score(
    asset: &Asset,
    sentiment: Option<&SentimentData>,
    volume_ath_btc: Option<f64>,
    volume_btc: Option<f64>,
) -> Score {
    AssetScoreCalculator::calculate(asset, sentiment, volume_ath_btc, volume_btc)
}

/// Round to 2 decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Present, non-zero and not NaN
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
