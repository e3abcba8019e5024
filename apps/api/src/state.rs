use std::sync::Arc;

use crate::model::ModelBundle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pre-trained model artifacts, loaded once at startup and never mutated.
    /// Inference is read-only, so concurrent requests share it with no locking.
    pub models: Arc<ModelBundle>,
}
