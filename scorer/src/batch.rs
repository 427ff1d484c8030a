//! Batch scoring of assets read from a JSON file

use std::{cmp::Ordering, fs, io::Write};

use asset_model::entity::{asset::Asset, score::Score, sentiment::SentimentData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, scoring::compute_score};

/// One asset to score, with its optional sentiment record
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntry {
    pub asset: Asset,
    #[serde(default)]
    pub sentiment: Option<SentimentData>,
}

/// Batch input file. The BTC volume figures are shared by every entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchInput {
    #[serde(default)]
    pub volume_ath_btc: Option<f64>,
    #[serde(default)]
    pub volume_btc: Option<f64>,
    #[serde(default)]
    pub assets: Vec<BatchEntry>,
}

/// Scoring result for one asset
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAsset {
    pub asset_id: String,
    pub symbol: Option<String>,
    pub score: Score,
    pub scored_at: DateTime<Utc>,
}

/// Load a batch from `path`
pub fn load_input(path: &str) -> Result<BatchInput, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&raw)?)
}

/// Score every entry in input order, stamped with the current time
pub fn score_batch(input: &BatchInput) -> Vec<ScoredAsset> {
    score_batch_at(input, Utc::now())
}

/// Score every entry in input order with a fixed `scored_at`
pub fn score_batch_at(input: &BatchInput, scored_at: DateTime<Utc>) -> Vec<ScoredAsset> {
    input
        .assets
        .iter()
        .map(|entry| {
            let score = compute_score(
                &entry.asset,
                entry.sentiment.as_ref(),
                input.volume_ath_btc,
                input.volume_btc,
            );

            tracing::debug!(
                asset = %entry.asset.id,
                total = score.total_score,
                "Scored asset"
            );

            ScoredAsset {
                asset_id: entry.asset.id.clone(),
                symbol: entry.asset.symbol.clone(),
                score,
                scored_at,
            }
        })
        .collect()
}

/// Sort by total score, best first. Ties keep input order, NaN goes last.
pub fn rank(scored: &mut [ScoredAsset]) {
    scored.sort_by(|a, b| {
        let (a, b) = (a.score.total_score, b.score.total_score);
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        }
    });
}

/// Write results as JSON to `path`, or to stdout when no path is given
pub fn write_output(
    scored: &[ScoredAsset],
    path: Option<&str>,
    pretty: bool,
) -> Result<(), AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(scored)?
    } else {
        serde_json::to_string(scored)?
    };

    match path {
        Some(path) => fs::write(path, json).map_err(|source| AppError::WriteOutput {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| AppError::WriteOutput {
                path: "<stdout>".to_string(),
                source,
            })
        }
    }
}
