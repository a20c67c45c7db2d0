use crate::domain::{RequestOutcome, TickerSymbol};

/// A request to fetch a prediction for one ticker. Tagged with the
/// generation it was issued under; the tag decides later whether the
/// settlement is still worth anything.
#[derive(Debug, Clone)]
pub struct QuoteJob {
    pub generation: u64,
    pub ticker: TickerSymbol,
}

/// The settled outcome returned by the worker.
#[derive(Debug, Clone)]
pub struct QuoteJobResult {
    pub generation: u64,
    pub ticker: TickerSymbol,
    pub duration_ms: u128,
    pub outcome: RequestOutcome,
}
