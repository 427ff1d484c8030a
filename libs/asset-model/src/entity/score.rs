use serde::{Deserialize, Serialize};

/// Composite quality score and its components, each rounded to 2 decimals
///
/// A component whose inputs were missing is reported as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub total_score: f64,
    pub volume_score: f64,
    pub liquidity_score: f64,
    pub exchanges_score: f64,
    pub supply_score: f64,
    pub social_score: f64,
}
