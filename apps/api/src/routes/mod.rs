pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::classify::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/predict", post(handlers::handle_predict))
        .with_state(state)
}
