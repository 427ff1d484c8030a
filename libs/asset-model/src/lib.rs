//! Plain data records exchanged with the asset scoring pipeline.
//!
//! Everything here is constructed by the caller, borrowed by the scorer and
//! dropped once a [`Score`] has been produced.

pub mod entity;

// Re-export commonly used types
pub use entity::{
    Asset, Exchange, ExchangeListing, ExchangeScore, SentimentData, Score, SlippageTier,
};
