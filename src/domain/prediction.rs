use {
    crate::domain::TickerSymbol,
    strum_macros::{Display, EnumString},
};

/// Categorical signal attached to a prediction. Display-only: it drives a
/// color and a caption, never any further calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Recommendation {
    #[strum(serialize = "BUY")]
    Buy,

    #[strum(serialize = "SELL")]
    Sell,

    #[strum(serialize = "HOLD")]
    Hold,
}

/// The trailing close-price series backing the chart, as sent by the
/// backend (one label per value, oldest first).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A fully validated prediction payload.
///
/// By the time one of these exists, shape validation has already run:
/// `chart.labels` and `chart.values` have equal lengths and every numeric
/// field was present on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub ticker: TickerSymbol,
    pub currency: String,
    pub current_price: f64,
    pub predicted_price: f64,
    pub sma10: f64,
    pub sma50: f64,
    pub rsi14: f64,
    pub recommendation: Recommendation,
    pub chart: ChartSeries,
}

/// What a settled request collapses to after classification.
///
/// `DomainError` carries a message the backend (or shape validation)
/// produced and is shown verbatim; `NetworkError` carries a fixed
/// user-safe message with the raw transport detail only in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(PredictionResult),
    DomainError(String),
    NetworkError(String),
}
