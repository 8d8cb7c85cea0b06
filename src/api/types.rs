//! API request and response types

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::analyzer::Analysis;
use crate::analyzer::AnalysisResult;
use crate::emotion::Emotion;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub lexicon_loaded: bool,
}

/// JSON text analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Where the analyzed text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Text,
    File,
}

/// Analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub emotions: AnalysisResult,
    pub total: u64,
    pub characters_analyzed: usize,
    pub source: AnalysisSource,
    /// Explanation shown when no emotion was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalyzeResponse {
    pub fn new(analysis: Analysis, source: AnalysisSource) -> Self {
        let message = analysis.emotions.is_empty().then(|| {
            match source {
                AnalysisSource::Text => "輸入的文字中沒有找到任何情緒詞。",
                AnalysisSource::File => "文件中沒有找到任何情緒詞。",
            }
            .to_string()
        });

        Self {
            total: analysis.emotions.total(),
            characters_analyzed: analysis.characters_analyzed,
            emotions: analysis.emotions,
            source,
            message,
        }
    }
}

/// Lexicon statistics response
#[derive(Debug, Serialize)]
pub struct LexiconStatsResponse {
    pub characters: usize,
    pub label_assignments: usize,
    pub characters_per_emotion: BTreeMap<Emotion, usize>,
}
