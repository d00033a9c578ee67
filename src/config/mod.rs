//! Configuration management.
//!
//! Configuration comes from an optional TOML file merged over built-in
//! defaults. Command-line flags and environment variables are applied on top
//! by the binary.
//!
//! ```toml
//! [store]
//! path = "chat.db"
//! table = "chat_data"
//! input_column = "input_text"
//! response_column = "response_text"
//!
//! [logging]
//! format = "pretty"   # or "json"
//! filter = "repartee=debug"
//! file = "/tmp/repartee.log"
//! ```

use crate::observability::LogFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default table holding the corpus.
pub const DEFAULT_TABLE: &str = "chat_data";
/// Default column holding the input side.
pub const DEFAULT_INPUT_COLUMN: &str = "input_text";
/// Default column holding the response side.
pub const DEFAULT_RESPONSE_COLUMN: &str = "response_text";

/// Main configuration for repartee.
#[derive(Debug, Clone, Default)]
pub struct ReparteeConfig {
    /// Corpus store settings.
    pub store: StoreConfig,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// A default-location config file that exists but could not be loaded.
#[derive(Debug)]
pub struct SkippedConfig {
    /// The file that was skipped.
    pub path: PathBuf,
    /// Why it failed to load.
    pub error: crate::Error,
}

/// Where and how the corpus is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the `SQLite` database.
    pub path: PathBuf,
    /// Table holding the pairs.
    pub table: String,
    /// Column holding the input side.
    pub input_column: String,
    /// Column holding the response side.
    pub response_column: String,
}

impl StoreConfig {
    /// Creates store settings for `path` with the default table and columns.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: DEFAULT_TABLE.to_string(),
            input_column: DEFAULT_INPUT_COLUMN.to_string(),
            response_column: DEFAULT_RESPONSE_COLUMN.to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("chat.db")
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive; `None` uses the built-in default.
    pub filter: Option<String>,
    /// Log file; `None` logs to stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Store section.
    pub store: Option<ConfigFileStore>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Store section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileStore {
    /// Database path.
    pub path: Option<String>,
    /// Table name.
    pub table: Option<String>,
    /// Input column name.
    pub input_column: Option<String>,
    /// Response column name.
    pub response_column: Option<String>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// "pretty" or "json".
    pub format: Option<String>,
    /// Filter directive.
    pub filter: Option<String>,
    /// Log file path.
    pub file: Option<String>,
}

impl ReparteeConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// logging format is unknown.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Self::from_config_file(file)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/repartee/` on macOS)
    /// 2. XDG config dir (`~/.config/repartee/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found. Files that
    /// exist but fail to load are skipped and returned alongside the config,
    /// since logging is not yet initialized when this runs.
    #[must_use]
    pub fn load_default() -> (Self, Vec<SkippedConfig>) {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return (Self::default(), Vec::new());
        };

        Self::load_first([
            base_dirs.config_dir().join("repartee").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("repartee")
                .join("config.toml"),
        ])
    }

    /// Loads the first candidate file that exists and parses.
    fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> (Self, Vec<SkippedConfig>) {
        let mut skipped = Vec::new();

        for path in candidates.into_iter().filter(|p| p.exists()) {
            match Self::load_from_file(&path) {
                Ok(config) => return (config, skipped),
                Err(error) => skipped.push(SkippedConfig { path, error }),
            }
        }

        (Self::default(), skipped)
    }

    /// Converts a `ConfigFile` to `ReparteeConfig`.
    fn from_config_file(file: ConfigFile) -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(store) = file.store {
            if let Some(path) = store.path {
                config.store.path = PathBuf::from(path);
            }
            if let Some(table) = store.table {
                config.store.table = table;
            }
            if let Some(column) = store.input_column {
                config.store.input_column = column;
            }
            if let Some(column) = store.response_column {
                config.store.response_column = column;
            }
        }
        if let Some(logging) = file.logging {
            if let Some(format) = logging.format {
                config.logging.format = LogFormat::parse(&format).ok_or_else(|| {
                    crate::Error::InvalidInput(format!("unknown log format '{format}'"))
                })?;
            }
            config.logging.filter = logging.filter;
            config.logging.file = logging.file.map(PathBuf::from);
        }

        Ok(config)
    }

    /// Sets the database path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }

    /// Sets the corpus table.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.store.table = table.into();
        self
    }
}
