//! User-editable projection settings and the fixed horizon they project over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::constants::{BLOCK_TIME_SECONDS, horizon};
use crate::config::{GasPerTx, GrowthPct, Metric, ReferenceChain};
use crate::engine::ChartRequest;

/// Fixed parameters of the projection. Not exposed to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionHorizon {
    pub start_date: NaiveDate,
    pub months: u32,
    pub initial_gas_limit: f64,
    pub block_time_seconds: f64,
}

impl ProjectionHorizon {
    pub const DEFAULT: Self = Self {
        start_date: horizon::START_DATE,
        months: horizon::MONTHS,
        initial_gas_limit: horizon::INITIAL_GAS_LIMIT,
        block_time_seconds: BLOCK_TIME_SECONDS,
    };
}

impl Default for ProjectionHorizon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the user can change. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectionSettings {
    pub metric: Metric,
    pub yoy: GrowthPct,
    pub gas_per_tx: GasPerTx,
    pub show_reference: bool,
    pub reference: ReferenceChain,
    pub log_scale: bool,
}

impl ProjectionSettings {
    /// Flattens settings + horizon into the plain numeric request the engine consumes.
    pub fn to_request(&self, horizon: &ProjectionHorizon) -> ChartRequest {
        ChartRequest {
            start_date: horizon.start_date,
            horizon_months: horizon.months,
            initial_gas_limit: horizon.initial_gas_limit,
            yoy_percent: self.yoy.value(),
            gas_per_tx: self.gas_per_tx.value(),
            block_time_seconds: horizon.block_time_seconds,
            metric: self.metric,
            show_reference: self.show_reference,
            reference_name: self.reference.name(),
            reference_tps: self.reference.tps(),
            log_scale: self.log_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_launch_configuration() {
        let settings = ProjectionSettings::default();
        assert_eq!(settings.metric, Metric::RatePerSecond);
        assert_eq!(settings.yoy.value(), 200.0);
        assert_eq!(settings.gas_per_tx.value(), 21_000.0);
        assert!(!settings.show_reference);
        assert!(!settings.log_scale);

        let horizon = ProjectionHorizon::default();
        assert_eq!(horizon.start_date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(horizon.months, 72);
        assert_eq!(horizon.initial_gas_limit, 60_000_000.0);
        assert_eq!(horizon.block_time_seconds, 12.0);
    }

    #[test]
    fn request_carries_settings_through() {
        let settings = ProjectionSettings {
            metric: Metric::TransactionsPerSecond,
            yoy: GrowthPct::new(50.0),
            gas_per_tx: GasPerTx::new(100_000.0),
            show_reference: true,
            reference: ReferenceChain::Solana3k,
            log_scale: true,
        };
        let req = settings.to_request(&ProjectionHorizon::DEFAULT);
        assert_eq!(req.yoy_percent, 50.0);
        assert_eq!(req.gas_per_tx, 100_000.0);
        assert_eq!(req.reference_tps, 3_000.0);
        assert_eq!(req.horizon_months, 72);
        assert!(req.show_reference && req.log_scale);
    }

    #[test]
    fn partial_persisted_state_falls_back_to_defaults() {
        let settings: ProjectionSettings =
            serde_json::from_str(r#"{"metric":"TransactionsPerSecond","yoy":75.0}"#).unwrap();
        assert_eq!(settings.metric, Metric::TransactionsPerSecond);
        assert_eq!(settings.yoy.value(), 75.0);
        assert_eq!(settings.gas_per_tx, GasPerTx::DEFAULT);
    }
}
