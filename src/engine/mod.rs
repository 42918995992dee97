//! Projection engine: pure functions from settings to chart series.

mod chart;
mod metrics;
mod projection;

pub use chart::{ChartRequest, MetricSeries, ProjectionChart, SeriesPoint, recompute, reference_label};
pub use metrics::{reference_value, to_rate_per_second, to_transaction_rate};
pub use projection::{ProjectionPoint, add_months, compute_monthly_rate, project_series};
