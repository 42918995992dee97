//! Value types for the projection settings (Immutable Blueprints)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::constants::{growth, reference, transaction};

/// Which derived quantity the chart shows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum Metric {
    /// Gas per second (GLPB / block time)
    #[default]
    #[strum(to_string = "GPS")]
    RatePerSecond,
    /// Approximate transactions per second (GPS / gas per tx)
    #[strum(to_string = "TPS")]
    TransactionsPerSecond,
    /// Gas limit per block
    #[strum(to_string = "GLPB")]
    CapacityPerUnit,
}

impl Metric {
    /// Y-axis title for the chart.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Self::RatePerSecond => "Rate per second",
            Self::TransactionsPerSecond => "Approx transactions per second",
            Self::CapacityPerUnit => "Capacity per block",
        }
    }

    /// One-line explanation shown in the header glossary.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RatePerSecond => {
                "gas capacity available each second, derived from gas limit / block time."
            }
            Self::TransactionsPerSecond => {
                "estimated tx throughput assuming a chosen gas-per-transaction."
            }
            Self::CapacityPerUnit => "maximum gas budget allowed in a single block.",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Self::RatePerSecond => "Gas per second",
            Self::TransactionsPerSecond => "Transactions per second",
            Self::CapacityPerUnit => "Gas limit per block",
        }
    }
}

/// Fixed external chain used for the flat comparison line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum ReferenceChain {
    #[default]
    #[strum(to_string = "Solana 100k")]
    Solana100k,
    #[strum(to_string = "Solana 3k")]
    Solana3k,
}

impl ReferenceChain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solana100k | Self::Solana3k => "Solana",
        }
    }

    /// Flat transactions-per-second figure for the overlay.
    pub fn tps(&self) -> f64 {
        match self {
            Self::Solana100k => reference::SOLANA_TPS_HIGH,
            Self::Solana3k => reference::SOLANA_TPS_LOW,
        }
    }
}

/// Year-over-year gas-limit growth in percent, clamped to the slider range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct GrowthPct(f64);

impl GrowthPct {
    pub const MIN: f64 = growth::MIN_YOY_PCT;
    pub const MAX: f64 = growth::MAX_YOY_PCT;
    pub const DEFAULT: Self = Self(growth::DEFAULT_YOY_PCT);

    pub const fn new(val: f64) -> Self {
        let v = if val < Self::MIN {
            Self::MIN
        } else if val > Self::MAX {
            Self::MAX
        } else if val.is_nan() {
            Self::MIN
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Annual multiplier, e.g. 200% -> 3.0
    #[inline]
    pub fn multiplier(self) -> f64 {
        1.0 + self.0 / 100.0
    }
}

impl Default for GrowthPct {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for GrowthPct {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

impl From<GrowthPct> for f64 {
    fn from(pct: GrowthPct) -> Self {
        pct.0
    }
}

impl std::fmt::Display for GrowthPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Assumed gas cost of one transaction. Whole units, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct GasPerTx(f64);

impl GasPerTx {
    pub const MIN: f64 = transaction::MIN_GAS_PER_TX;
    pub const DEFAULT: Self = Self(transaction::DEFAULT_GAS_PER_TX);

    pub fn new(val: f64) -> Self {
        if val.is_nan() {
            return Self(Self::MIN);
        }
        Self(val.round().max(Self::MIN))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for GasPerTx {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for GasPerTx {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

impl From<GasPerTx> for f64 {
    fn from(gas: GasPerTx) -> Self {
        gas.0
    }
}

impl std::fmt::Display for GasPerTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
