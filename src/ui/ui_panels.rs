use eframe::egui::{ComboBox, DragValue, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::constants::growth::SLIDER_STEP_PCT;
use crate::config::plot::PLOT_CONFIG;
use crate::config::{GasPerTx, GrowthPct, Metric, ProjectionHorizon, ProjectionSettings, ReferenceChain};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{
    format_compact, format_compact_trimmed, format_date, format_fixed, format_full, format_multiplier,
};

/// Title, one-line description of the horizon and a glossary of the three metrics.
pub(crate) fn render_header(ui: &mut Ui, horizon: &ProjectionHorizon) {
    ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
    ui.label(format!(
        "{} {}, {} {}, {}",
        UI_TEXT.header_subtitle_start,
        format_date(horizon.start_date, PLOT_CONFIG.x_label_format),
        UI_TEXT.header_subtitle_initial,
        format_full(horizon.initial_gas_limit),
        UI_TEXT.header_subtitle_growth,
    ));
    for metric in Metric::iter() {
        ui.label(
            RichText::new(format!(
                "{} ({}): {}",
                metric.long_name(),
                metric,
                metric.description()
            ))
            .small()
            .color(PLOT_CONFIG.color_text_subdued),
        );
    }
}

/// All user inputs. Writes straight into `settings`; clamping happens in the value types.
pub(crate) fn render_controls(ui: &mut Ui, settings: &mut ProjectionSettings) {
    ui.horizontal_wrapped(|ui| {
        // 1. METRIC
        ui.label(RichText::new(UI_TEXT.label_metric).strong());
        for metric in Metric::iter() {
            ui.selectable_value(&mut settings.metric, metric, metric.to_string())
                .on_hover_text(metric.long_name());
        }

        ui.separator();

        // 2. GROWTH
        let mut yoy = settings.yoy.value();
        ui.label(format!(
            "{} {}% ({}x)",
            UI_TEXT.label_yoy,
            yoy,
            format_multiplier(yoy)
        ));
        let slider = Slider::new(&mut yoy, GrowthPct::MIN..=GrowthPct::MAX)
            .step_by(SLIDER_STEP_PCT)
            .show_value(false);
        if ui.add(slider).changed() {
            settings.yoy = GrowthPct::new(yoy);
        }

        ui.separator();

        // 3. GAS PER TX
        let mut gas = settings.gas_per_tx.value();
        ui.label(UI_TEXT.label_gas_per_tx);
        let drag = DragValue::new(&mut gas)
            .range(GasPerTx::MIN..=f64::MAX)
            .speed(100.0)
            .fixed_decimals(0);
        if ui.add(drag).on_hover_text(UI_TEXT.hover_gas_per_tx).changed() {
            settings.gas_per_tx = GasPerTx::new(gas);
        }

        ui.separator();

        // 4. OVERLAY
        ui.checkbox(&mut settings.show_reference, UI_TEXT.label_show_reference);
        ui.add_enabled_ui(settings.show_reference, |ui| {
            ComboBox::from_id_salt("reference_chain")
                .selected_text(settings.reference.to_string())
                .show_ui(ui, |ui| {
                    for chain in ReferenceChain::iter() {
                        ui.selectable_value(&mut settings.reference, chain, chain.to_string());
                    }
                });
        });

        ui.separator();

        // 5. SCALE
        ui.checkbox(&mut settings.log_scale, UI_TEXT.label_log_scale)
            .on_hover_text(UI_TEXT.hover_log_scale);
    });
}

/// "YoY growth: 200% (3.00x), Gas/tx: 21.00k"
pub(crate) fn summary_text(settings: &ProjectionSettings) -> String {
    format!(
        "{} {}% ({}x), {} {}",
        UI_TEXT.summary_yoy,
        settings.yoy.value(),
        format_fixed(settings.yoy.multiplier(), 2),
        UI_TEXT.summary_gas_per_tx,
        format_compact(settings.gas_per_tx.value()),
    )
}

pub(crate) fn footer_text(settings: &ProjectionSettings, horizon: &ProjectionHorizon) -> String {
    format!(
        "{} {}s; {} {} {} {} TPS.",
        UI_TEXT.footer_block_time,
        horizon.block_time_seconds,
        UI_TEXT.footer_tps_note,
        settings.reference.name(),
        UI_TEXT.footer_overlay,
        format_compact_trimmed(settings.reference.tps()),
    )
}

pub(crate) fn render_footer(ui: &mut Ui, settings: &ProjectionSettings, horizon: &ProjectionHorizon) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(footer_text(settings, horizon))
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    });
}
