use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, TopBottomPanel, Visuals},
    },
    std::{sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::AppState,
    config::ENDPOINT,
    data::{QuoteClient, ReqwestHttpClient},
    domain::{RequestOutcome, TickerSymbol},
    engine::PredictionEngine,
    ui::{self, ChartView, UI_CONFIG, present},
};

/// The controller: owns the UI state, the engine, and the chart handle,
/// and wires both input adapters (button, Enter key) into one submit path.
pub struct App {
    query_input: String,
    state: AppState,
    engine: PredictionEngine,
    chart: ChartView,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        let base_url = args.endpoint.as_deref().unwrap_or(ENDPOINT.base_url);
        let http = Arc::new(ReqwestHttpClient::new(ENDPOINT.user_agent)?);
        Ok(Self::with_client(QuoteClient::new(http, base_url)))
    }

    fn with_client(client: QuoteClient) -> Self {
        Self {
            query_input: String::new(),
            state: AppState::default(),
            engine: PredictionEngine::new(client),
            chart: ChartView::new(),
        }
    }

    /// The one submit entry point, fed by both triggers.
    fn submit(&mut self) {
        match TickerSymbol::parse(&self.query_input) {
            Ok(ticker) => {
                self.engine.submit(ticker);
                self.state = AppState::Loading;
            }
            Err(e) => {
                // The validation error owns the screen now. Advance the
                // generation so an older in-flight request cannot take it
                // back when it settles.
                self.engine.invalidate();
                self.chart.clear();
                self.state = AppState::Failed(e.to_string());
            }
        }
    }

    /// Applies the settled outcome of the latest issued request, if one
    /// arrived since last frame. Stale settlements never reach this point.
    fn pump_results(&mut self) {
        let Some(settled) = self.engine.pump() else {
            return;
        };

        log::info!(
            "request for {} settled in {}ms",
            settled.ticker,
            settled.duration_ms
        );

        self.state = match settled.outcome {
            RequestOutcome::Success(result) => {
                let model = present(&result);
                self.chart.show_series(&result, &model.chart_heading);
                AppState::Ready(result)
            }
            RequestOutcome::DomainError(message) | RequestOutcome::NetworkError(message) => {
                self.chart.clear();
                AppState::Failed(message)
            }
        };
    }

    fn render_query_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("query_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                // The submit affordance is disabled while Loading, but the
                // generation guard in the engine is what makes rapid
                // resubmission safe, not this.
                let enabled = !matches!(self.state, AppState::Loading);
                if ui::query_bar(ui, &mut self.query_input, enabled) {
                    self.submit();
                }
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match &self.state {
                AppState::Idle => ui::idle_hint(ui),
                AppState::Loading => ui::loading_row(ui),
                AppState::Failed(message) => ui::error_banner(ui, message),
                AppState::Ready(result) => {
                    let model = present(result);
                    ui::results_panel(ui, &model);
                    ui.add_space(12.0);
                    self.chart.ui(ui);
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.pump_results();
        self.render_query_panel(ctx);
        self.render_central_panel(ctx);

        if matches!(self.state, AppState::Loading) {
            // Settlements arrive over a channel, not through input events,
            // so keep frames coming while a request is in flight.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
