//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Projected metric line
    pub primary_line_color: Color32,
    pub primary_line_width: f32,

    /// Flat reference-chain line
    pub reference_line_color: Color32,
    pub reference_line_width: f32,
    /// Dash length in points
    pub reference_dash_length: f32,

    /// Upper bound on labelled x-axis (month) marks
    pub x_target_labels: f64,
    pub x_label_format: &'static str,
    pub tooltip_date_format: &'static str,

    pub plot_height: f32,
    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    primary_line_color: Color32::from_rgb(59, 130, 246), // Blue
    primary_line_width: 2.0,

    reference_line_color: Color32::from_rgb(16, 185, 129), // Emerald
    reference_line_width: 2.0,
    reference_dash_length: 6.0,

    x_target_labels: 12.0,
    x_label_format: "%b %Y",
    tooltip_date_format: "%Y-%m-%d",

    plot_height: 420.0,
    plot_y_padding_pct: 0.05,

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
