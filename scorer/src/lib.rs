//! Composite quality scoring for crypto assets.

pub mod batch;
pub mod error;
pub mod scoring;

pub use scoring::{
    compute_score, liquidity_from_slippage, listing_liquidity, min_slippage_at_tier,
    AssetScoreCalculator,
};
