//! Asset quality scoring
//!
//! Calculates a composite quality score (0-100) for a crypto asset from
//! five weighted components:
//! - Volume (x1): 24h volume relative to a BTC-denominated reference
//! - Liquidity (x2): order-book slippage at $10k, $100k and $1M
//! - Exchanges (x1): average rating of the venues listing the asset
//! - Supply (x1): circulating share of total supply
//! - Social (x2): weighted sentiment scaled by social volume

pub mod asset_score;
pub mod liquidity;
pub mod weights;

pub use asset_score::{compute_score, round2, AssetScoreCalculator};
pub use liquidity::{liquidity_from_slippage, listing_liquidity, min_slippage_at_tier};
