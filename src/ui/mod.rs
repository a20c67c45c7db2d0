mod chart;
mod panels;
mod presenter;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use chart::ChartView;

pub(crate) use panels::{error_banner, idle_hint, loading_row, query_bar, results_panel};

pub(crate) use presenter::{DisplayModel, DisplayVariant, present};

pub(crate) use styles::{SignalColor, UiStyleExt};

pub use ui_config::{UI_CONFIG, UI_TEXT};
