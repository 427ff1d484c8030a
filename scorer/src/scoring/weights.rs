//! Fixed component weights for the total score

pub const FACTOR_VOLUME: f64 = 1.0;
pub const FACTOR_LIQUIDITY: f64 = 2.0;
pub const FACTOR_EXCHANGES: f64 = 1.0;
pub const FACTOR_SUPPLY: f64 = 1.0;
pub const FACTOR_SOCIAL: f64 = 2.0;

pub const FACTOR_TOTAL: f64 =
    FACTOR_VOLUME + FACTOR_LIQUIDITY + FACTOR_EXCHANGES + FACTOR_SUPPLY + FACTOR_SOCIAL;
