//! Configuration for the stock-scope application.

// Can all be private now because we have a public re-export.
mod endpoint;
mod plot;

// Re-export commonly used items
pub use endpoint::{ENDPOINT, EndpointConfig};
pub use plot::PLOT_CONFIG;
