use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

const PRIMARY_CONFIG: &str = "config.toml";
const EXAMPLE_CONFIG: &str = "config.example.toml";

/// Where the configuration comes from
///
/// Discovery only checks the filesystem, so the caller can report the
/// choice once logging is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path named on the command line
    Explicit(PathBuf),
    /// `config.toml`
    Primary(PathBuf),
    /// `config.example.toml`
    Example(PathBuf),
    /// No file found; built-in defaults
    Defaults,
}

impl ConfigSource {
    /// Resolve the source relative to the working directory
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self::discover_in(Path::new(""), explicit)
    }

    pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        let primary = dir.join(PRIMARY_CONFIG);
        if primary.exists() {
            return Self::Primary(primary);
        }
        let example = dir.join(EXAMPLE_CONFIG);
        if example.exists() {
            return Self::Example(example);
        }
        Self::Defaults
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Primary(path) | Self::Example(path) => Some(path),
            Self::Defaults => None,
        }
    }

    /// Warning to show when no real configuration file was used
    pub fn fallback_notice(&self) -> Option<String> {
        match self {
            Self::Example(path) => Some(format!(
                "Using {}. Please create {PRIMARY_CONFIG} for production use.",
                path.display()
            )),
            Self::Defaults => Some("No config file found, using built-in defaults".to_string()),
            Self::Explicit(_) | Self::Primary(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
    /// Maximum accepted request body, uploads included
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) const fn default_port() -> u16 {
    5000
}

pub(crate) const fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Path of the tab-separated emotion lexicon
    #[serde(default = "default_lexicon_path")]
    pub path: PathBuf,
}

pub(crate) fn default_lexicon_path() -> PathBuf {
    PathBuf::from("Chinese-Traditional-NRC-EmoLex.txt")
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: default_lexicon_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory holding uploads while they are processed
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,
}

pub(crate) fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path when given, otherwise from the default locations
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        Self::from_source(&ConfigSource::discover(path))
    }

    /// Load from a resolved source; a missing explicit file is an error
    pub fn from_source(source: &ConfigSource) -> crate::Result<Self> {
        match source.path() {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> crate::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(crate::EmolexError::Config(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(crate::EmolexError::Config(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        if self.lexicon.path.as_os_str().is_empty() {
            return Err(crate::EmolexError::Config(
                "lexicon.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get lexicon file path
    pub fn lexicon_path(&self) -> &Path {
        &self.lexicon.path
    }

    /// Get upload directory
    pub fn upload_dir(&self) -> &Path {
        &self.upload.dir
    }

    /// Get maximum request body size in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_bytes
    }
}
