// src/app/state.rs

use crate::domain::PredictionResult;

/// The single mutually-exclusive UI state. Owned by the app, mutated only
/// on the UI thread, and always resubmittable: there is no terminal state.
pub(crate) enum AppState {
    Idle,
    Loading,
    Ready(PredictionResult),
    Failed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle
    }
}
