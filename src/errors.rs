use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmolexError {
    #[error("Lexicon file not found: {}", .0.display())]
    LexiconNotFound(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Document extraction error: {0}")]
    DocumentExtraction(String),

    #[error("Invalid emotion label: {0}")]
    InvalidEmotion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<zip::result::ZipError> for EmolexError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::DocumentExtraction(format!("invalid DOCX archive: {err}"))
    }
}

impl From<quick_xml::Error> for EmolexError {
    fn from(err: quick_xml::Error) -> Self {
        Self::DocumentExtraction(format!("failed to parse DOCX XML: {err}"))
    }
}

impl EmolexError {
    /// Whether the error was caused by the caller's input rather than the service
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType(_) | Self::InvalidEmotion(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EmolexError>;
