// Pure mapping from a validated prediction payload to renderable strings.
// Nothing here touches the network, the chart, or any widget.

use crate::domain::{PredictionResult, Recommendation};
use crate::ui::UI_TEXT;

/// Which visual treatment the recommendation card gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    Positive,
    Negative,
    Neutral,
}

/// Everything the results panel needs, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// e.g. "AAPL ($)"
    pub headline: String,
    pub current_price: String,
    pub predicted_price: String,
    pub sma10: String,
    pub sma50: String,
    pub rsi14: String,
    pub recommendation: String,
    pub variant: DisplayVariant,
    pub chart_heading: String,
}

pub fn present(result: &PredictionResult) -> DisplayModel {
    let variant = match result.recommendation {
        Recommendation::Buy => DisplayVariant::Positive,
        Recommendation::Sell => DisplayVariant::Negative,
        Recommendation::Hold => DisplayVariant::Neutral,
    };

    DisplayModel {
        headline: format!("{} ({})", result.ticker, result.currency),
        current_price: format_money(&result.currency, result.current_price),
        predicted_price: format_money(&result.currency, result.predicted_price),
        sma10: format_money(&result.currency, result.sma10),
        sma50: format_money(&result.currency, result.sma50),
        rsi14: format!("{:.2}", result.rsi14),
        recommendation: result.recommendation.to_string(),
        variant,
        chart_heading: UI_TEXT.chart_heading(result.ticker.as_str(), result.chart.len()),
    }
}

/// "$" + 1234.5 -> "$1,234.50"
fn format_money(currency: &str, value: f64) -> String {
    format!("{}{}", currency, group_thousands(value))
}

fn group_thousands(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
