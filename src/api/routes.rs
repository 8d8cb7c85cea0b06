//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Analysis
        .route("/analyze", post(handlers::analyze_text))
        // Lexicon statistics
        .route("/lexicon", get(handlers::lexicon_stats))
        .with_state(state)
}

/// Create the form page router
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_form))
        .with_state(state)
}
