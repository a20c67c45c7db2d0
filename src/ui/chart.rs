// The single close-price chart. The rendered chart object is owned here:
// one live chart per display slot, released before its replacement is
// created.

use eframe::egui::{RichText, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, GridMark, HPlacement, Line, Plot, PlotPoints, VPlacement};

use crate::config::PLOT_CONFIG;
use crate::domain::PredictionResult;
use crate::ui::UI_CONFIG;

/// A prepared chart: the series points, axis labels, and the epoch that
/// salts the plot id. Replacing the whole struct is what "destroy" means
/// here; the superseded chart's id (and with it egui's per-id view
/// memory) becomes unreachable.
pub struct PriceChart {
    epoch: u64,
    heading: String,
    currency: String,
    labels: Vec<String>,
    points: Vec<[f64; 2]>,
    y_bounds: (f64, f64),
}

impl PriceChart {
    pub fn series_len(&self) -> usize {
        self.points.len()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Owns at most one live `PriceChart` at a time.
#[derive(Default)]
pub struct ChartView {
    chart: Option<PriceChart>,
    next_epoch: u64,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases any previous chart and prepares a new one for the
    /// result's series.
    ///
    /// A label/value length mismatch is rejected upstream during shape
    /// validation, so hitting it here only warrants a warning; the
    /// previous chart stays up rather than rendering garbage.
    pub fn show_series(&mut self, result: &PredictionResult, heading: &str) {
        let series = &result.chart;
        if series.labels.len() != series.values.len() {
            log::warn!(
                "chart series mismatch for {}: {} labels vs {} values",
                result.ticker,
                series.labels.len(),
                series.values.len()
            );
            return;
        }

        // Release before create. The slot never holds two charts.
        self.chart = None;
        self.next_epoch += 1;

        let points: Vec<[f64; 2]> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();

        let chart = PriceChart {
            epoch: self.next_epoch,
            heading: heading.to_string(),
            currency: result.currency.clone(),
            labels: series.labels.clone(),
            points,
            y_bounds: padded_y_bounds(&series.values),
        };
        log::debug!(
            "chart rebuilt for {}: {} points (epoch {})",
            result.ticker,
            chart.series_len(),
            chart.epoch()
        );
        self.chart = Some(chart);
    }

    pub fn clear(&mut self) {
        self.chart = None;
    }

    pub fn current(&self) -> Option<&PriceChart> {
        self.chart.as_ref()
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let Some(chart) = self.current() else {
            return;
        };

        ui.label(
            RichText::new(&chart.heading)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );

        let axis_labels = chart.labels.clone();
        let x_axis = AxisHints::new(Axis::X)
            .formatter(move |mark: GridMark, _range| {
                // Ticks land on whole indices only; anything else is grid noise.
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON {
                    return String::new();
                }
                axis_labels
                    .get(idx as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .placement(VPlacement::Bottom);

        let y_axis = AxisHints::new(Axis::Y)
            .formatter(|mark: GridMark, _range| format!("{:.2}", mark.value))
            .placement(HPlacement::Right);

        let tooltip_labels = chart.labels.clone();
        let currency = chart.currency.clone();
        let (y_min, y_max) = chart.y_bounds;

        Plot::new(("price_chart", chart.epoch))
            .height(PLOT_CONFIG.plot_height)
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                x_tick_marks(min, max)
            })
            .label_formatter(move |_name, point| {
                let idx = point.x.round();
                if idx >= 0.0 && (idx as usize) < tooltip_labels.len() {
                    format!(
                        "{}\n{}{:.2}",
                        tooltip_labels[idx as usize], currency, point.y
                    )
                } else {
                    String::new()
                }
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: false, y: false })
            .allow_zoom(Vec2b { x: false, y: false })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(y_min..=y_max);
                plot_ui.line(
                    Line::new("", PlotPoints::new(chart.points.clone()))
                        .color(UI_CONFIG.colors.accent)
                        .width(PLOT_CONFIG.line_width),
                );
            });
    }
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    let result = nice_step * mag;

    // Never step less than one session
    result.max(1.0)
}

/// Tick marks near `PLOT_CONFIG.x_tick_target`, however long the series is.
fn x_tick_marks(min: f64, max: f64) -> Vec<GridMark> {
    let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_tick_target);

    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;

    let mut marks = Vec::new();
    for i in start..=end {
        marks.push(GridMark {
            value: i as f64 * step,
            step_size: step,
        });
    }
    marks
}

// Price series read best relative to their own range, so the axis is
// never forced down to zero.
fn padded_y_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    // Flat series still needs visible headroom.
    let range = (max - min).max(min.abs() * 0.01).max(1e-6);
    let pad = range * PLOT_CONFIG.plot_y_padding_pct;
    (min - pad, max + pad)
}
