use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

use crate::engine::add_months;

/// Monotonic clock that also works on wasm.
pub type AppInstant = web_time::Instant;

pub const SECS_IN_D: f64 = 86_400.0;
/// Mean Gregorian month
pub const SECS_IN_MONTH: f64 = SECS_IN_D * 30.436_875;

const MONTH_STEPS: [u32; 6] = [1, 2, 3, 6, 12, 24];

// Time Helper functions

/// Plot x coordinate for a date: seconds since the Unix epoch at UTC midnight.
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Inverse of `date_to_plot_x`. None when x is outside chrono's range.
pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    DateTime::from_timestamp(x.floor() as i64, 0).map(|dt| dt.date_naive())
}

pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    // Used for display purposes
    format!("{}", date.format(fmt))
}

/// First-of-month plot positions inside `[min_x, max_x]`, every `step_months`
/// months, aligned so that month-of-year is a multiple of the step (Jan/Jul for 6).
pub fn month_marks(min_x: f64, max_x: f64, step_months: u32) -> Vec<f64> {
    const MAX_MARKS: usize = 240;

    let step = step_months.max(1);
    let (Some(lo), Some(hi)) = (plot_x_to_date(min_x), plot_x_to_date(max_x)) else {
        return Vec::new();
    };
    let Some(mut month) = NaiveDate::from_ymd_opt(lo.year(), lo.month(), 1) else {
        return Vec::new();
    };
    if date_to_plot_x(month) < min_x {
        month = add_months(month, 1);
    }
    while month.month0() % step != 0 && month != NaiveDate::MAX {
        month = add_months(month, 1);
    }

    let mut marks = Vec::new();
    while month <= hi && month != NaiveDate::MAX && marks.len() < MAX_MARKS {
        marks.push(date_to_plot_x(month));
        month = add_months(month, step);
    }
    marks
}

/// Smallest "nice" month step that keeps the label count at or below `target_labels`.
pub fn month_step_for_span(span_secs: f64, target_labels: f64) -> u32 {
    let span_months = span_secs.abs() / SECS_IN_MONTH;
    MONTH_STEPS
        .into_iter()
        .find(|&step| span_months / step as f64 <= target_labels.max(1.0))
        .unwrap_or(MONTH_STEPS[MONTH_STEPS.len() - 1])
}
