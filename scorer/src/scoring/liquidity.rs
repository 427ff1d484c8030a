//! Liquidity scoring from order-book slippage
//!
//! Slippage inputs are fractions of the trade notional (0.02 = 2%).

use asset_model::entity::{
    asset::{Asset, SlippageTier},
    exchange::ExchangeListing,
};

/// Assumed slippage at $10k when unknown. Unknown liquidity scores as poor.
pub const DEFAULT_SLIPPAGE_10K: f64 = 0.25;
/// Assumed slippage at $100k when unknown
pub const DEFAULT_SLIPPAGE_100K: f64 = 0.5;

/// Share of the liquidity score taken from the $10k/$100k base tier
const BASE_WEIGHT: f64 = 0.9;
/// Share of the liquidity score taken from the $1M top tier
const TOP_WEIGHT: f64 = 0.1;
/// $100k slippage counts 1.5x as much as $10k slippage
const SLIPPAGE_100K_MULTIPLIER: f64 = 1.5;

/// Calculate a liquidity score (0-100) from slippage at $10k, $100k and $1M
///
/// - Base (90%): `100 - (s10k + 1.5 * s100k) * 100`, floored at 0, with
///   missing tiers replaced by [`DEFAULT_SLIPPAGE_10K`] / [`DEFAULT_SLIPPAGE_100K`]
/// - Top (10%): `100 - s1m * 100`, floored at 0. A missing $1M figure means
///   100% slippage, so the top score stays 0. A recorded 0 is kept.
pub fn liquidity_from_slippage(
    slippage_10k: Option<f64>,
    slippage_100k: Option<f64>,
    slippage_1m: Option<f64>,
) -> f64 {
    let base_factor = slippage_10k.unwrap_or(DEFAULT_SLIPPAGE_10K)
        + SLIPPAGE_100K_MULTIPLIER * slippage_100k.unwrap_or(DEFAULT_SLIPPAGE_100K);
    let base_score = (100.0 - base_factor * 100.0).max(0.0);

    let top_score = match slippage_1m {
        Some(slippage) => (100.0 - slippage * 100.0).max(0.0),
        None => 0.0,
    };

    (BASE_WEIGHT * base_score + TOP_WEIGHT * top_score).max(0.0)
}

/// Liquidity score for a single venue, using that listing's own slippage
pub fn listing_liquidity(listing: &ExchangeListing) -> f64 {
    liquidity_from_slippage(
        listing.slippage_10000,
        listing.slippage_100000,
        listing.slippage_1000000,
    )
}

/// Lowest slippage any listing of `asset` reports at `tier`
///
/// Listings without a figure at that tier are ignored, and so are recorded
/// zeros. When no listing qualifies the result is `f64::NEG_INFINITY`, which
/// callers must treat as "no data" rather than a slippage value.
pub fn min_slippage_at_tier(asset: &Asset, tier: SlippageTier) -> f64 {
    asset
        .exchanges_data
        .iter()
        .filter_map(|listing| listing.slippage_at(tier))
        .filter(|slippage| *slippage != 0.0 && !slippage.is_nan())
        .reduce(f64::min)
        .unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn listing(s10k: Option<f64>, s100k: Option<f64>, s1m: Option<f64>) -> ExchangeListing {
        ExchangeListing {
            slippage_10000: s10k,
            slippage_100000: s100k,
            slippage_1000000: s1m,
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_slippage_scores_zero() {
        assert_eq!(liquidity_from_slippage(None, None, None), 0.0);
    }

    #[test]
    fn test_zero_slippage_scores_perfect() {
        assert_relative_eq!(liquidity_from_slippage(Some(0.0), Some(0.0), Some(0.0)), 100.0);
    }

    #[test]
    fn test_base_tier_weighting() {
        // 0.01 + 1.5 * 0.02 = 0.04 -> base 96 -> 0.9 * 96
        assert_relative_eq!(
            liquidity_from_slippage(Some(0.01), Some(0.02), None),
            86.4,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            liquidity_from_slippage(Some(0.01), Some(0.02), Some(0.1)),
            95.4,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_single_missing_tier_uses_default() {
        // 0.25 + 1.5 * 0.1 = 0.4 -> base 60
        assert_relative_eq!(
            liquidity_from_slippage(None, Some(0.1), None),
            54.0,
            epsilon = 1e-9
        );
        // 0.05 + 1.5 * 0.5 = 0.8 -> base 20
        assert_relative_eq!(
            liquidity_from_slippage(Some(0.05), None, None),
            18.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_top_tier_only() {
        // Defaults wipe out the base tier; a recorded 0 at $1M still counts
        assert_relative_eq!(liquidity_from_slippage(None, None, Some(0.0)), 10.0);
    }

    #[test]
    fn test_scores_floor_at_zero() {
        assert_eq!(liquidity_from_slippage(Some(1.0), Some(1.0), Some(3.0)), 0.0);
        assert_eq!(liquidity_from_slippage(Some(0.5), Some(0.5), None), 0.0);
    }

    #[test]
    fn test_valid_inputs_stay_in_range() {
        let steps = [0.0, 0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 1.0];
        for s10k in steps {
            for s100k in steps {
                for s1m in steps {
                    let score = liquidity_from_slippage(Some(s10k), Some(s100k), Some(s1m));
                    assert!(
                        (0.0..=100.0).contains(&score),
                        "score {score} out of range for ({s10k}, {s100k}, {s1m})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_listing_liquidity_uses_listing_fields() {
        let venue = listing(Some(0.01), Some(0.02), Some(0.1));
        assert_eq!(
            listing_liquidity(&venue),
            liquidity_from_slippage(Some(0.01), Some(0.02), Some(0.1))
        );
        assert_eq!(listing_liquidity(&ExchangeListing::default()), 0.0);
    }

    #[test]
    fn test_min_slippage_skips_missing_and_zero() {
        let asset = Asset {
            id: "solana".to_string(),
            exchanges_data: vec![
                listing(Some(0.02), None, None),
                listing(Some(0.0), None, None),
                listing(None, Some(0.04), None),
                listing(Some(0.01), Some(0.05), None),
            ],
            ..Default::default()
        };

        assert_eq!(min_slippage_at_tier(&asset, SlippageTier::Usd10K), 0.01);
        assert_eq!(min_slippage_at_tier(&asset, SlippageTier::Usd100K), 0.04);
    }

    #[test]
    fn test_min_slippage_without_data_is_sentinel() {
        let no_listings = Asset::default();
        assert_eq!(
            min_slippage_at_tier(&no_listings, SlippageTier::Usd10K),
            f64::NEG_INFINITY
        );

        let zeros_only = Asset {
            exchanges_data: vec![listing(Some(0.0), None, Some(0.0))],
            ..Default::default()
        };
        assert_eq!(
            min_slippage_at_tier(&zeros_only, SlippageTier::Usd10K),
            f64::NEG_INFINITY
        );
        assert_eq!(
            min_slippage_at_tier(&zeros_only, SlippageTier::Usd1M),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_min_slippage_untracked_listing_tiers() {
        let asset = Asset {
            slippage_100: Some(0.001),
            exchanges_data: vec![listing(Some(0.01), Some(0.02), Some(0.03))],
            ..Default::default()
        };

        assert_eq!(min_slippage_at_tier(&asset, SlippageTier::Usd100), f64::NEG_INFINITY);
        assert_eq!(min_slippage_at_tier(&asset, SlippageTier::Usd1K), f64::NEG_INFINITY);
        assert_eq!(min_slippage_at_tier(&asset, SlippageTier::Usd1M), 0.03);
    }
}
