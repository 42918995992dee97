pub struct UiText {
    pub app_title: &'static str,

    // Header
    pub header_subtitle_start: &'static str,
    pub header_subtitle_initial: &'static str,
    pub header_subtitle_growth: &'static str,

    // Controls
    pub label_metric: &'static str,
    pub label_yoy: &'static str,
    pub label_gas_per_tx: &'static str,
    pub label_show_reference: &'static str,
    pub label_log_scale: &'static str,
    pub hover_gas_per_tx: &'static str,
    pub hover_log_scale: &'static str,

    // Summary line above the plot
    pub summary_yoy: &'static str,
    pub summary_gas_per_tx: &'static str,

    // Plot
    pub plot_x_axis: &'static str,

    // Footer
    pub footer_block_time: &'static str,
    pub footer_tps_note: &'static str,
    pub footer_overlay: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Ethereum Gas Projection",

    header_subtitle_start: "Starting",
    header_subtitle_initial: "initial gas limit",
    header_subtitle_growth: "monthly compounding growth.",

    label_metric: "Metric",
    label_yoy: "YoY gas limit increase:",
    label_gas_per_tx: "Gas per transaction",
    label_show_reference: "Show",
    label_log_scale: "Y-axis log scale",
    hover_gas_per_tx: "21,000 is a plain ETH transfer. Swaps and contract calls cost more.",
    hover_log_scale: "Plots log10 of the value. Zero values are hidden.",

    summary_yoy: "YoY growth:",
    summary_gas_per_tx: "Gas/tx:",

    plot_x_axis: "Date",

    footer_block_time: "Block time",
    footer_tps_note: "TPS depends on gas/tx assumption.",
    footer_overlay: "overlay at",
};
