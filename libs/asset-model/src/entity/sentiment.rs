use serde::{Deserialize, Serialize};

/// Social sentiment signal for an asset
///
/// Callers guarantee `weighted_sentiment` lies in [-1, 1] and
/// `social_volume_normalization_factor` in [0, 10]. Neither is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentData {
    pub weighted_sentiment: f64,
    pub social_volume_normalization_factor: f64,
}
