use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Metric;
use crate::engine::metrics::reference_value;
use crate::engine::projection::project_series;
use crate::utils::{date_to_plot_x, format_compact_trimmed};

/// Plain numeric input for one recompute. No validation happens past this point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    pub start_date: NaiveDate,
    pub horizon_months: u32,
    pub initial_gas_limit: f64,
    pub yoy_percent: f64,
    pub gas_per_tx: f64,
    pub block_time_seconds: f64,
    pub metric: Metric,
    pub show_reference: bool,
    pub reference_name: &'static str,
    pub reference_tps: f64,
    pub log_scale: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: NaiveDate,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub label: String,
    pub data: Vec<SeriesPoint>,
}

impl MetricSeries {
    /// Points in plot space. x is seconds since the Unix epoch.
    /// In log mode y becomes log10(y) and non-positive values are dropped,
    /// since they have no place on a log axis.
    pub fn plot_points(&self, log_scale: bool) -> Vec<[f64; 2]> {
        self.data
            .iter()
            .filter_map(|p| {
                let x = date_to_plot_x(p.x);
                if !log_scale {
                    return Some([x, p.y]);
                }
                (p.y > 0.0).then(|| [x, p.y.log10()])
            })
            .collect()
    }
}

/// Everything the chart surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionChart {
    pub metric: Metric,
    pub primary: MetricSeries,
    pub reference: Option<MetricSeries>,
    pub y_label: &'static str,
    pub log_scale: bool,
}

impl ProjectionChart {
    /// Primary first, then the overlay if present.
    pub fn series(&self) -> impl Iterator<Item = &MetricSeries> {
        std::iter::once(&self.primary).chain(self.reference.as_ref())
    }
}

/// Legend label of the overlay, e.g. "Solana (100k TPS)".
pub fn reference_label(name: &str, tps: f64) -> String {
    format!("{} ({} TPS)", name, format_compact_trimmed(tps))
}

/// Recomputes the whole chart from scratch. Called on every settings change.
pub fn recompute(req: &ChartRequest) -> ProjectionChart {
    let projection = project_series(
        req.start_date,
        req.horizon_months,
        req.initial_gas_limit,
        req.yoy_percent,
    );

    let primary = MetricSeries {
        label: req.metric.to_string(),
        data: projection
            .iter()
            .map(|p| SeriesPoint {
                x: p.date,
                y: req
                    .metric
                    .convert(p.gas_limit, req.gas_per_tx, req.block_time_seconds),
            })
            .collect(),
    };

    let reference = req.show_reference.then(|| {
        let flat = reference_value(
            req.gas_per_tx,
            req.metric,
            req.block_time_seconds,
            req.reference_tps,
        );
        MetricSeries {
            label: reference_label(req.reference_name, req.reference_tps),
            data: projection
                .iter()
                .map(|p| SeriesPoint { x: p.date, y: flat })
                .collect(),
        }
    });

    ProjectionChart {
        metric: req.metric,
        primary,
        reference,
        y_label: req.metric.axis_label(),
        log_scale: req.log_scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GasPerTx, GrowthPct, ProjectionHorizon, ProjectionSettings, ReferenceChain};

    fn request(metric: Metric, show_reference: bool) -> ChartRequest {
        ProjectionSettings {
            metric,
            show_reference,
            ..Default::default()
        }
        .to_request(&ProjectionHorizon::DEFAULT)
    }

    #[test]
    fn primary_series_spans_the_horizon() {
        let chart = recompute(&request(Metric::RatePerSecond, false));
        assert_eq!(chart.primary.data.len(), 72);
        assert_eq!(chart.primary.label, "GPS");
        assert_eq!(chart.y_label, "Rate per second");
        assert_eq!(chart.primary.data[0].y, 5_000_000.0);
        assert!(chart.reference.is_none());
        assert_eq!(chart.series().count(), 1);
    }

    #[test]
    fn axis_labels_follow_metric() {
        assert_eq!(
            recompute(&request(Metric::TransactionsPerSecond, false)).y_label,
            "Approx transactions per second"
        );
        assert_eq!(
            recompute(&request(Metric::CapacityPerUnit, false)).y_label,
            "Capacity per block"
        );
    }

    #[test]
    fn reference_is_flat_and_shares_dates() {
        let chart = recompute(&request(Metric::TransactionsPerSecond, true));
        let reference = chart.reference.as_ref().unwrap();
        assert_eq!(reference.label, "Solana (100k TPS)");
        assert_eq!(reference.data.len(), chart.primary.data.len());
        for (r, p) in reference.data.iter().zip(&chart.primary.data) {
            assert_eq!(r.x, p.x);
            assert_eq!(r.y, 100_000.0);
        }
        assert_eq!(chart.series().count(), 2);
    }

    #[test]
    fn reference_follows_preset_and_gas() {
        let settings = ProjectionSettings {
            metric: Metric::RatePerSecond,
            gas_per_tx: GasPerTx::new(50_000.0),
            show_reference: true,
            reference: ReferenceChain::Solana3k,
            ..Default::default()
        };
        let chart = recompute(&settings.to_request(&ProjectionHorizon::DEFAULT));
        let reference = chart.reference.unwrap();
        assert_eq!(reference.label, "Solana (3k TPS)");
        assert!(reference.data.iter().all(|p| p.y == 150_000_000.0));
    }

    #[test]
    fn reference_label_uses_short_throughput() {
        assert_eq!(reference_label("Solana", 100_000.0), "Solana (100k TPS)");
        assert_eq!(reference_label("Solana", 1_500_000.0), "Solana (1.50M TPS)");
        assert_eq!(reference_label("Local", 650.0), "Local (650 TPS)");
    }

    #[test]
    fn glpb_series_is_the_raw_projection() {
        let settings = ProjectionSettings {
            metric: Metric::CapacityPerUnit,
            yoy: GrowthPct::new(0.0),
            ..Default::default()
        };
        let chart = recompute(&settings.to_request(&ProjectionHorizon::DEFAULT));
        assert!(chart.primary.data.iter().all(|p| p.y == 60_000_000.0));
    }

    #[test]
    fn log_points_drop_non_positive_values() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let series = MetricSeries {
            label: "TPS".to_string(),
            data: vec![SeriesPoint { x: d, y: 0.0 }, SeriesPoint { x: d, y: 1000.0 }],
        };
        let linear = series.plot_points(false);
        assert_eq!(linear.len(), 2);
        let log = series.plot_points(true);
        assert_eq!(log.len(), 1);
        assert!((log[0][1] - 3.0).abs() < 1e-12);
        assert_eq!(log[0][0], linear[1][0]);
    }

    #[test]
    fn empty_horizon_gives_empty_series() {
        let mut req = request(Metric::RatePerSecond, true);
        req.horizon_months = 0;
        let chart = recompute(&req);
        assert!(chart.primary.data.is_empty());
        assert!(chart.reference.unwrap().data.is_empty());
    }
}
