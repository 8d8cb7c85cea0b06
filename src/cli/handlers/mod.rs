//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - analyze: Text and document analysis
//! - info: Information display (lexicon report, config)
//! - serve: HTTP server

pub mod analyze;
pub mod info;
pub mod serve;

// Re-export all public handlers
pub use analyze::*;
pub use info::*;
pub use serve::*;
