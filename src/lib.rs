// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::{PredictionResult, Recommendation, RequestOutcome, TickerSymbol};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend (default: the configured dev server)
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
