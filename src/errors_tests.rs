//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use crate::errors::EmolexError;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = EmolexError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_lexicon_not_found_mentions_path() {
        let error = EmolexError::LexiconNotFound(PathBuf::from("missing/emolex.txt"));
        let display = format!("{error}");
        assert!(display.contains("missing/emolex.txt"));
    }

    #[test]
    fn test_unsupported_file_type_is_client_error() {
        let error = EmolexError::UnsupportedFileType("report.pdf".to_string());
        assert!(error.is_client_error());
        assert!(format!("{error}").contains("report.pdf"));
    }

    #[test]
    fn test_extraction_error_is_not_client_error() {
        let error = EmolexError::DocumentExtraction("broken".to_string());
        assert!(!error.is_client_error());
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: EmolexError = io_err.into();
        assert!(matches!(err, EmolexError::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: EmolexError = toml_err.into();
        assert!(matches!(err, EmolexError::TomlParsing(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: EmolexError = json_err.into();
        assert!(matches!(err, EmolexError::Serialization(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: EmolexError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, EmolexError::DocumentExtraction(_)));
    }
}
