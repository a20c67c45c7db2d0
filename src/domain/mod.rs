// Domain types and value objects
mod prediction;
mod ticker;

// Re-export commonly used types
pub use prediction::{ChartSeries, PredictionResult, Recommendation, RequestOutcome};
pub use ticker::{TickerError, TickerSymbol};
