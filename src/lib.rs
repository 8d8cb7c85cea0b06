//! Lexicon-based emotion scoring for Chinese text
//!
//! A [`Lexicon`] maps single CJK ideographs to the emotions they evoke.
//! [`analyze`] counts, per emotion, how often lexicon characters occur in a
//! text. The [`api`] module serves this over HTTP and [`cli`] drives it from
//! the command line.

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod emotion;
pub mod errors;
pub mod lexicon;
pub mod logging;

#[cfg(test)]
mod errors_tests;

pub use analyzer::analyze;
pub use analyzer::AnalysisResult;
pub use config::AppConfig;
pub use emotion::Emotion;
pub use errors::*;
pub use lexicon::Lexicon;
