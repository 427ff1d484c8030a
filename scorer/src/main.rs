//! Asset Scorer
//!
//! Scores a batch of assets read from a JSON file and writes the results
//! as JSON, best first.

use std::env;

use scorer::{batch, error::AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod defaults {
    pub const SCORER_INPUT: &str = "assets.json";
    pub const SCORER_PRETTY: &str = "false";
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input_path =
        env::var("SCORER_INPUT").unwrap_or_else(|_| defaults::SCORER_INPUT.to_string());
    let output_path = env::var("SCORER_OUTPUT").ok();

    let pretty_env =
        env::var("SCORER_PRETTY").unwrap_or_else(|_| defaults::SCORER_PRETTY.to_string());
    let pretty = pretty_env
        .parse::<bool>()
        .map_err(|_| AppError::InvalidEnvVar {
            name: "SCORER_PRETTY".into(),
            value: pretty_env.clone(),
        })?;

    tracing::info!("Scoring assets from {}", input_path);

    let input = batch::load_input(&input_path)?;
    if input.volume_btc.is_none() {
        tracing::warn!("No volume_btc in input, all volume scores will be 0");
    }

    let mut scored = batch::score_batch(&input);
    batch::rank(&mut scored);

    if let Some(best) = scored.first() {
        tracing::info!(
            "Scored {} assets, best: {} ({})",
            scored.len(),
            best.asset_id,
            best.score.total_score
        );
    } else {
        tracing::info!("No assets in input");
    }

    batch::write_output(&scored, output_path.as_deref(), pretty)?;

    Ok(())
}
