// Top Level Constants

/// Ethereum slot time. Every conversion takes it as a parameter; this is the default.
pub const BLOCK_TIME_SECONDS: f64 = 12.0;

pub mod horizon {
    use chrono::NaiveDate;

    // 2025-12-01. `expect` is unavailable in const context, hence the match.
    pub const START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 1) {
        Some(d) => d,
        None => NaiveDate::MIN,
    };
    pub const MONTHS: u32 = 72;
    pub const INITIAL_GAS_LIMIT: f64 = 60_000_000.0;
}

pub mod growth {
    pub const MIN_YOY_PCT: f64 = 0.0;
    pub const MAX_YOY_PCT: f64 = 500.0;
    pub const SLIDER_STEP_PCT: f64 = 5.0;
    pub const DEFAULT_YOY_PCT: f64 = 200.0;
}

pub mod transaction {
    /// Plain ETH transfer
    pub const DEFAULT_GAS_PER_TX: f64 = 21_000.0;
    pub const MIN_GAS_PER_TX: f64 = 1.0;
}

pub mod reference {
    pub const SOLANA_TPS_HIGH: f64 = 100_000.0;
    pub const SOLANA_TPS_LOW: f64 = 3_000.0;
}
