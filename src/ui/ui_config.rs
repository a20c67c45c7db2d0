use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    /// Close-price line and other accents
    pub accent: Color32,
    /// BUY affordance
    pub positive: Color32,
    /// SELL affordance
    pub negative: Color32,
    /// HOLD affordance
    pub neutral: Color32,
    pub error_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 230),
        central_panel: Color32::from_rgb(18, 18, 22),
        side_panel: Color32::from_rgb(25, 25, 25),
        accent: Color32::from_rgb(78, 115, 223),
        positive: Color32::from_rgb(46, 160, 67),
        negative: Color32::from_rgb(218, 54, 51),
        neutral: Color32::from_rgb(210, 153, 34),
        error_text: Color32::from_rgb(255, 120, 120),
    },
};

impl UiConfig {
    /// Frame for the top query bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    // Frame for the results/chart area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the error banner, stroked so it reads as a distinct region
    pub fn error_banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::new(1.0, self.colors.negative),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
