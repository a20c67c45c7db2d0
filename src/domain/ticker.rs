// Ticker symbol validation. This is the only gate between raw user input
// and the network layer.

/// Why a raw input failed to become a `TickerSymbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerError {
    Empty,
}

impl std::fmt::Display for TickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TickerError::Empty => write!(f, "Please enter a ticker symbol"),
        }
    }
}

impl std::error::Error for TickerError {}

/// A normalized, non-empty ticker symbol.
///
/// Construction goes through `parse`, which trims and upper-cases, so a
/// value of this type is already in the form the backend expects. No
/// character-set restriction beyond non-emptiness: the backend is the
/// authority on which symbols exist, and anything URL-unsafe gets
/// percent-encoded at request-build time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TickerError::Empty);
        }
        Ok(TickerSymbol(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
