//! API server handlers

use std::sync::Arc;

use crate::api::serve_api;
use crate::AppConfig;
use crate::Lexicon;
use crate::Result;

pub async fn handle_serve_command(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    // CLI arguments take priority over config
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = cors || config.server.enable_cors;

    println!("🚀 Starting emolex server");
    println!("=========================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!("📖 Lexicon: {}", config.lexicon_path().display());
    println!();

    // Loaded once; every request reads the same immutable lexicon
    let lexicon = Arc::new(Lexicon::load(config.lexicon_path()));

    serve_api(config, lexicon, host, port, cors).await
}
