//! Plot visualization configuration

pub struct PlotConfig {
    /// Target number of x-axis grid marks. The actual count stays near
    /// this regardless of how many sessions the series holds.
    pub x_tick_target: f64,
    pub plot_y_padding_pct: f64, // Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    /// Width of the close-price line
    pub line_width: f32,
    /// Fixed height reserved for the chart under the results panel
    pub plot_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    x_tick_target: 8.0,
    plot_y_padding_pct: 0.05,
    line_width: 2.0,
    plot_height: 320.0,
};
