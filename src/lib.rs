// Core modules
pub mod config;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries)
pub use config::{PERSISTENCE, ProjectionHorizon, ProjectionSettings};
pub use engine::{ChartRequest, ProjectionChart, recompute};
pub use ui::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ignore settings saved by a previous session
    #[arg(long, default_value_t = false)]
    pub reset_settings: bool,

    /// Start with this YoY gas limit increase in percent (clamped to 0..=500)
    #[arg(long)]
    pub yoy: Option<f64>,

    /// Start with this gas-per-transaction assumption (at least 1)
    #[arg(long)]
    pub gas_per_tx: Option<f64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
