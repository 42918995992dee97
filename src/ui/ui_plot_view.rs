use eframe::egui::{Ui, Vec2};
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints, VPlacement};

use crate::config::Metric;
use crate::config::plot::PLOT_CONFIG;
use crate::engine::ProjectionChart;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{
    SECS_IN_MONTH, format_date, format_full, month_marks, month_step_for_span, plot_x_to_date,
};

/// Undo the log10 transform for display.
fn display_value(y: f64, log_scale: bool) -> f64 {
    if log_scale { 10f64.powf(y) } else { y }
}

// Month-aligned x marks, spaced so labels never crowd.
fn month_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = month_step_for_span(max - min, PLOT_CONFIG.x_target_labels);
    let step_size = step as f64 * SECS_IN_MONTH;
    month_marks(min, max, step)
        .into_iter()
        .map(|value| GridMark { value, step_size })
        .collect()
}

// In log space: whole decades, plus 2x and 5x when fewer than 3 decades are visible.
fn log_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let first = min.floor() as i64;
    let last = max.ceil() as i64;
    let fine = (max - min) < 3.0;

    let mut marks = Vec::new();
    for decade in first..=last {
        let base = decade as f64;
        marks.push(GridMark { value: base, step_size: 1.0 });
        if fine {
            for sub in [2f64, 5f64] {
                marks.push(GridMark { value: base + sub.log10(), step_size: 0.1 });
            }
        }
    }
    marks.retain(|m| m.value >= min && m.value <= max);
    marks
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|mark, _range| {
            plot_x_to_date(mark.value)
                .map(|d| format_date(d, PLOT_CONFIG.x_label_format))
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_y_axis(label: &str, log_scale: bool) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(move |mark, _range| format_full(display_value(mark.value, log_scale)))
        .placement(HPlacement::Left)
}

/// Hover text: "<series>: <value>" then the date.
fn hover_label(name: &str, x: f64, y: f64, log_scale: bool) -> String {
    let date = plot_x_to_date(x)
        .map(|d| format_date(d, PLOT_CONFIG.tooltip_date_format))
        .unwrap_or_default();
    let value = format_full(display_value(y, log_scale));
    if name.is_empty() {
        format!("{}\n{}", value, date)
    } else {
        format!("{}: {}\n{}", name, value, date)
    }
}

#[derive(Default)]
pub struct PlotView {
    // Bounds are re-fitted whenever the y domain changes meaning
    last_domain: Option<(Metric, bool)>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { last_domain: None }
    }

    pub fn show(&mut self, ui: &mut Ui, chart: &ProjectionChart) {
        let log_scale = chart.log_scale;
        let domain = (chart.metric, log_scale);
        let refit = self.last_domain != Some(domain);
        if refit {
            log::debug!("Plot domain changed to {:?}, refitting bounds", domain);
            self.last_domain = Some(domain);
        }

        let mut plot = Plot::new("projection_plot")
            .height(PLOT_CONFIG.plot_height.max(ui.available_height()))
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_y_axis(chart.y_label, log_scale)])
            .x_grid_spacer(month_grid_spacer)
            .set_margin_fraction(Vec2::new(0.02, PLOT_CONFIG.plot_y_padding_pct as f32))
            .label_formatter(move |name, value| hover_label(name, value.x, value.y, log_scale))
            .allow_scroll(false);

        if log_scale {
            plot = plot.y_grid_spacer(log_grid_spacer);
        }

        let primary = Line::new(
            chart.primary.label.clone(),
            PlotPoints::new(chart.primary.plot_points(log_scale)),
        )
        .color(PLOT_CONFIG.primary_line_color)
        .width(PLOT_CONFIG.primary_line_width);

        let reference = chart.reference.as_ref().map(|series| {
            Line::new(series.label.clone(), PlotPoints::new(series.plot_points(log_scale)))
                .color(PLOT_CONFIG.reference_line_color)
                .width(PLOT_CONFIG.reference_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.reference_dash_length,
                })
        });

        plot.show(ui, |plot_ui| {
            if refit {
                plot_ui.set_auto_bounds(true);
            }
            plot_ui.line(primary);
            if let Some(line) = reference {
                plot_ui.line(line);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date_to_plot_x;
    use chrono::NaiveDate;

    #[test]
    fn hover_shows_series_value_and_date() {
        let x = date_to_plot_x(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(
            hover_label("GPS", x, 15_000_000.0, false),
            "GPS: 15,000,000\n2026-12-01"
        );
        assert_eq!(hover_label("", x, 3.0, true), "1,000\n2026-12-01");
    }

    #[test]
    fn log_spacer_marks_decades() {
        let marks = log_grid_spacer(GridInput { bounds: (5.5, 10.2), base_step_size: 0.1 });
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![6.0, 7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn log_spacer_adds_sub_decades_when_zoomed_in() {
        let marks = log_grid_spacer(GridInput { bounds: (2.0, 3.0), base_step_size: 0.1 });
        assert_eq!(marks.len(), 4); // 100, 200, 500, 1000
        assert!(log_grid_spacer(GridInput { bounds: (f64::NEG_INFINITY, 1.0), base_step_size: 0.1 }).is_empty());
    }
}
