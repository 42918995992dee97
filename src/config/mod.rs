//! Configuration module for the gas projection application.

mod debug;
mod persistence;
mod settings;
mod types;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use constants::BLOCK_TIME_SECONDS;
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use settings::{ProjectionHorizon, ProjectionSettings};
pub use types::{GasPerTx, GrowthPct, Metric, ReferenceChain};
