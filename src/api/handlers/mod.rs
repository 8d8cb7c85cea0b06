/// API request handlers
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::lexicon::Lexicon;

// Re-export sub-modules
pub mod analyze;
pub mod lexicon;

// Re-export handlers
pub use analyze::*;
pub use lexicon::*;

const INDEX_PAGE: &str = include_str!("../../../static/index.html");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(lexicon: Arc<Lexicon>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            lexicon,
            upload_dir: Arc::new(upload_dir.into()),
        }
    }
}

/// Handler result carrying an `ApiResponse` on both paths
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

pub(crate) fn reject<T>(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse::error(message)))
}

/// Analysis form page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lexicon_loaded: !state.lexicon.is_empty(),
    }))
}
