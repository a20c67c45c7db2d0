// Widget layout for the query bar, results panel, error banner, and
// loading row. Everything here renders data it is handed; no component
// below the app reaches into these widgets.

use {
    crate::ui::{DisplayModel, SignalColor, UI_CONFIG, UI_TEXT, UiStyleExt},
    eframe::egui::{Button, Grid, Key, RichText, TextEdit, Ui},
};

/// Renders the ticker field and submit button. Returns true when the user
/// asked to submit, whether by button or by Enter in the field; both
/// triggers feed the same path.
pub(crate) fn query_bar(ui: &mut Ui, input: &mut String, enabled: bool) -> bool {
    let mut submitted = false;

    ui.horizontal(|ui| {
        let field = ui.add_enabled(
            enabled,
            TextEdit::singleline(input)
                .hint_text(UI_TEXT.query_hint.as_str())
                .desired_width(220.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submitted = true;
        }

        let button = ui.add_enabled(enabled, Button::new(UI_TEXT.query_button.as_str()));
        if button.clicked() {
            submitted = true;
        }
    });

    submitted && enabled
}

pub(crate) fn loading_row(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label_subdued(UI_TEXT.cp_loading.as_str());
    });
}

pub(crate) fn idle_hint(ui: &mut Ui) {
    ui.label_subdued(UI_TEXT.cp_idle_hint.as_str());
}

pub(crate) fn error_banner(ui: &mut Ui, message: &str) {
    UI_CONFIG.error_banner_frame().show(ui, |ui| {
        ui.label(RichText::new(message).color(UI_CONFIG.colors.error_text));
    });
}

pub(crate) fn results_panel(ui: &mut Ui, model: &DisplayModel) {
    ui.heading(
        RichText::new(&model.headline)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(6.0);

    Grid::new("results_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label_subdued(UI_TEXT.label_current_price.as_str());
            ui.label(RichText::new(&model.current_price).strong());
            ui.end_row();

            ui.label_subdued(UI_TEXT.label_predicted_price.as_str());
            ui.label(RichText::new(&model.predicted_price).strong());
            ui.end_row();

            ui.label_subdued(UI_TEXT.label_sma10.as_str());
            ui.label(&model.sma10);
            ui.end_row();

            ui.label_subdued(UI_TEXT.label_sma50.as_str());
            ui.label(&model.sma50);
            ui.end_row();

            ui.label_subdued(UI_TEXT.label_rsi14.as_str());
            ui.label(&model.rsi14);
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.metric(
        &UI_TEXT.label_recommendation,
        &model.recommendation,
        model.variant.color(),
    );
}
