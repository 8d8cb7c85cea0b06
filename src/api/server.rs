//! HTTP server implementation

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::lexicon::Lexicon;
use crate::Result;

/// Assemble the application router with its middleware layers
pub fn build_app(state: AppState, max_body_bytes: usize, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .merge(routes::page_routes(state.clone()))
        .nest("/api", routes::api_routes(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(
    config: &AppConfig,
    lexicon: Arc<Lexicon>,
    host: String,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("🚀 Starting emolex server...");

    if lexicon.is_empty() {
        warn!("Emotion lexicon is empty - every analysis will report no emotions");
    }

    let state = AppState::new(lexicon, config.upload_dir());
    let app = build_app(state, config.max_upload_bytes(), enable_cors);

    // Start server
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("Available endpoints:");
    info!("  GET  /              - Analysis form");
    info!("  POST /analyze       - Analyze form text or uploaded .txt/.docx file");
    info!("  GET  /api/health    - Health check");
    info!("  POST /api/analyze   - Analyze JSON text");
    info!("  GET  /api/lexicon   - Lexicon statistics");

    axum::serve(listener, app).await?;

    Ok(())
}
