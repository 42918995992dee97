mod format;
mod perf;
pub mod time_utils;

pub use format::{
    format_compact, format_compact_trimmed, format_fixed, format_full, format_multiplier,
};
pub use time_utils::{
    AppInstant, SECS_IN_MONTH, date_to_plot_x, format_date, month_marks, month_step_for_span,
    plot_x_to_date,
};
