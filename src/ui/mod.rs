mod app;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
mod utils;

pub use app::App;
