use eframe::egui::{CentralPanel, Context, RichText, TopBottomPanel};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};

use crate::Cli;

use crate::config::plot::PLOT_CONFIG;
use crate::config::{DF, GasPerTx, GrowthPct, ProjectionHorizon, ProjectionSettings};

use crate::engine::{ProjectionChart, recompute};

use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_panels::{render_controls, render_footer, render_header, summary_text};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // This persists across sessions
    pub(crate) settings: ProjectionSettings,

    #[serde(skip)]
    pub(crate) horizon: ProjectionHorizon,

    // Settings the current chart was computed from. None forces a recompute.
    #[serde(skip)]
    rendered_settings: Option<ProjectionSettings>,

    #[serde(skip)]
    chart: Option<ProjectionChart>,

    #[serde(skip)]
    plot_view: PlotView,
}

impl Default for App {
    fn default() -> Self {
        Self {
            settings: ProjectionSettings::default(),
            horizon: ProjectionHorizon::default(),
            rendered_settings: None,
            chart: None,
            plot_view: PlotView::new(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = match cc.storage {
            Some(storage) if !args.reset_settings => {
                eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
            }
            _ => Self::default(),
        };

        if DF.log_persistence {
            log::info!("LOAD [App]: settings = {:?}", app.settings);
        }

        app.apply_overrides(&args);
        setup_custom_visuals(&cc.egui_ctx);
        app
    }

    /// Command-line values win over persisted ones.
    fn apply_overrides(&mut self, args: &Cli) {
        if let Some(yoy) = args.yoy {
            self.settings.yoy = GrowthPct::new(yoy);
            log::info!("YoY overridden from command line: {}", self.settings.yoy);
        }
        if let Some(gas) = args.gas_per_tx {
            self.settings.gas_per_tx = GasPerTx::new(gas);
            log::info!("Gas/tx overridden from command line: {}", self.settings.gas_per_tx);
        }
    }

    /// Recomputes the chart if any setting changed since the last frame.
    pub(crate) fn refresh_chart(&mut self) -> bool {
        if self.chart.is_some() && self.rendered_settings == Some(self.settings) {
            return false;
        }

        let request = self.settings.to_request(&self.horizon);
        let chart = crate::trace_time!("Recompute projection", 1_000, { recompute(&request) });

        if DF.log_recompute {
            log::info!(
                "Recomputed {} ({} points, reference: {}, log: {})",
                chart.primary.label,
                chart.primary.data.len(),
                chart.reference.is_some(),
                chart.log_scale
            );
        }

        self.chart = Some(chart);
        self.rendered_settings = Some(self.settings);
        true
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        TopBottomPanel::top("header_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                render_header(ui, &self.horizon);
                ui.add_space(8.0);
                render_controls(ui, &mut self.settings);
            });

        TopBottomPanel::bottom("footer_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| render_footer(ui, &self.settings, &self.horizon));

        self.refresh_chart();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(summary_text(&self.settings))
                        .color(PLOT_CONFIG.color_text_neutral),
                );
                if let Some(chart) = &self.chart {
                    self.plot_view.show(ui, chart);
                }
            });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_persistence {
            log::info!("SAVE [App]: settings = {:?}", self.settings);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Metric;

    #[test]
    fn recomputes_only_when_settings_change() {
        let mut app = App::default();
        assert!(app.refresh_chart());
        assert!(!app.refresh_chart());

        app.settings.metric = Metric::TransactionsPerSecond;
        assert!(app.refresh_chart());
        assert_eq!(app.chart.as_ref().unwrap().primary.label, "TPS");
        assert!(!app.refresh_chart());

        app.settings.show_reference = true;
        assert!(app.refresh_chart());
        assert!(app.chart.as_ref().unwrap().reference.is_some());
    }

    #[test]
    fn command_line_overrides_are_clamped() {
        let mut app = App::default();
        app.apply_overrides(&Cli {
            reset_settings: false,
            yoy: Some(900.0),
            gas_per_tx: Some(0.0),
        });
        assert_eq!(app.settings.yoy.value(), 500.0);
        assert_eq!(app.settings.gas_per_tx.value(), 1.0);
    }

    #[test]
    fn only_settings_are_persisted() {
        let mut app = App::default();
        app.settings.log_scale = true;
        app.refresh_chart();
        let json = serde_json::to_string(&app).unwrap();
        assert!(!json.contains("chart"));
        let restored: App = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.settings, app.settings);
        assert!(restored.chart.is_none());
    }
}
