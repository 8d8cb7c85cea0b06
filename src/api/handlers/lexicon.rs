/// Lexicon-related API handlers
use axum::extract::State;
use axum::Json;
use tracing::info;

use super::AppState;
use crate::api::types::*;

/// Get lexicon statistics
pub async fn lexicon_stats(State(state): State<AppState>) -> Json<ApiResponse<LexiconStatsResponse>> {
    info!("GET /api/lexicon");

    Json(ApiResponse::success(LexiconStatsResponse {
        characters: state.lexicon.len(),
        label_assignments: state.lexicon.label_count(),
        characters_per_emotion: state.lexicon.characters_per_emotion(),
    }))
}
