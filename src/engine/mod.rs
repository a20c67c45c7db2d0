mod core;
mod messages;
mod worker;

pub use core::PredictionEngine;

pub use messages::QuoteJobResult;
