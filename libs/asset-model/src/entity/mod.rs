pub mod asset;
pub mod exchange;
pub mod sentiment;
pub mod score;

// Re-exports for convenience
pub use asset::{Asset, SlippageTier};
pub use exchange::{Exchange, ExchangeListing, ExchangeScore};
pub use sentiment::SentimentData;
pub use score::Score;
