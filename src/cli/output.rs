//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `emolex` CLI

use std::path::Path;

use crate::analyzer::Analysis;
use crate::lexicon::LayoutSource;
use crate::lexicon::Lexicon;
use crate::lexicon::LoadReport;
use crate::AppConfig;
use crate::Emotion;

const BAR_WIDTH: usize = 30;

/// Render a proportional bar of `#` characters, at least one for non-zero counts
#[must_use]
pub fn render_bar(count: u64, max: u64, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max as f64) * width as f64).round() as usize;
    "#".repeat(filled.clamp(1, width))
}

/// Print analysis counts, one row per emotion that occurred
pub fn print_analysis(analysis: &Analysis) {
    println!(
        "📊 Analyzed {} Chinese characters",
        analysis.characters_analyzed
    );

    if analysis.emotions.is_empty() {
        print_info("No emotion words found");
        return;
    }

    let max = analysis.emotions.dominant().map_or(0, |(_, count)| count);
    println!();
    for (emotion, count) in analysis.emotions.iter() {
        println!(
            "  {:<13} {:<4} {:>5}  {}",
            emotion.as_str(),
            emotion.zh_name(),
            count,
            render_bar(count, max, BAR_WIDTH)
        );
    }
    println!();
    println!("  Total matches: {}", analysis.emotions.total());
    if let Some((emotion, count)) = analysis.emotions.dominant() {
        println!("  Dominant: {} ({}) x{}", emotion, emotion.zh_name(), count);
    }
}

/// Print lexicon load statistics
pub fn print_load_report(path: &Path, lexicon: &Lexicon, report: &LoadReport) {
    println!("📖 Lexicon: {}", path.display());
    println!();

    let layout = match report.layout {
        Some(LayoutSource::Header) => "resolved from header",
        Some(LayoutSource::Positional) => "positional fallback",
        None => "no header",
    };
    println!("  Column layout:     {layout}");
    println!("  Data lines:        {}", report.data_lines);
    println!("  Accepted lines:    {}", report.accepted_lines);
    println!("  Skipped (short):   {}", report.skipped_short);
    println!("  Skipped (word):    {}", report.skipped_word);
    println!("  Characters:        {}", lexicon.len());
    println!("  Label assignments: {}", report.label_assignments);
    println!();

    let per_emotion = lexicon.characters_per_emotion();
    println!("  Characters per emotion:");
    for emotion in Emotion::ALL {
        println!(
            "    {:<13} {:>6}",
            emotion.as_str(),
            per_emotion.get(&emotion).copied().unwrap_or(0)
        );
    }
}

pub fn print_config(config: &AppConfig) {
    println!("📋 emolex Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Address: {}", config.bind_address());
    println!("  CORS: {}", config.server.enable_cors);
    println!("  Max upload: {} bytes", config.max_upload_bytes());
    println!();

    println!("📖 Lexicon:");
    println!("  Path: {}", config.lexicon_path().display());
    println!();

    println!("📂 Uploads:");
    println!("  Directory: {}", config.upload_dir().display());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}
