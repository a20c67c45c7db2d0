use {
    crate::ui::{DisplayVariant, UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

/// Color for a recommendation's display variant.
pub trait SignalColor {
    fn color(&self) -> Color32;
}

impl SignalColor for DisplayVariant {
    fn color(&self) -> Color32 {
        match self {
            Self::Positive => UI_CONFIG.colors.positive,
            Self::Negative => UI_CONFIG.colors.negative,
            Self::Neutral => UI_CONFIG.colors.neutral,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).color(color));
        });
    }
}
