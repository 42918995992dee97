use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One month of the gas-limit projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    /// Gas limit per block at `date`
    pub gas_limit: f64,
}

/// Converts a year-over-year growth percentage into the equivalent monthly compounding rate.
/// Compounding the result twelve times gives back `1 + yoy_percent / 100`.
pub fn compute_monthly_rate(yoy_percent: f64) -> f64 {
    let yoy_decimal = yoy_percent / 100.0;
    (1.0 + yoy_decimal).powf(1.0 / 12.0) - 1.0
}

/// Adds whole calendar months, clamping the day to the end of shorter months.
/// Saturates at `NaiveDate::MAX` instead of failing.
pub fn add_months(start: NaiveDate, months: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Projects the gas limit forward month by month.
///
/// Returns exactly `months` points. Point `m` sits `m` calendar months after
/// `start_date` with value `initial_value * (1 + monthly_rate)^m`, so point 0
/// is always `initial_value` itself.
pub fn project_series(
    start_date: NaiveDate,
    months: u32,
    initial_value: f64,
    yoy_percent: f64,
) -> Vec<ProjectionPoint> {
    let growth = 1.0 + compute_monthly_rate(yoy_percent);

    (0..months)
        .map(|m| ProjectionPoint {
            date: add_months(start_date, m),
            gas_limit: initial_value * growth.powi(m as i32),
        })
        .collect()
}
