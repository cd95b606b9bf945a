//! Kiosk configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! `SUVIDHA_*` environment variables, then command-line flags.
//!
//! # Example
//!
//! ```ignore
//! use suvidha::config::KioskConfig;
//! use suvidha::models::Language;
//!
//! let config = KioskConfig::from_env()
//!     .with_language(Language::Marathi)
//!     .with_export_dir("/tmp/receipts");
//! ```

use std::path::PathBuf;

use crate::adapters::FileKeyValueStore;
use crate::models::Language;

/// Directory for persisted state and the log file.
pub const DATA_DIR_ENV: &str = "SUVIDHA_DATA_DIR";
/// Directory receipts are written to.
pub const EXPORT_DIR_ENV: &str = "SUVIDHA_EXPORT_DIR";
/// Initial UI language, as a code (`en`, `hi`, `mr`) or native name.
pub const LANG_ENV: &str = "SUVIDHA_LANG";
/// `tracing` filter directive.
pub const LOG_ENV: &str = "SUVIDHA_LOG";

const APP_DIR_NAME: &str = "suvidha";
const LOG_FILE_NAME: &str = "suvidha.log";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Where the key-value store keeps its files
    pub data_dir: PathBuf,
    /// Where exported receipts are written
    pub export_dir: PathBuf,
    /// Language the kiosk starts in
    pub language: Language,
    /// Filter directive for the log file
    pub log_filter: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        let export_dir = dirs::document_dir().unwrap_or_else(|| data_dir.clone());
        Self {
            data_dir,
            export_dir,
            language: Language::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl KioskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `SUVIDHA_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`KioskConfig::from_env`] over an arbitrary variable source.
    ///
    /// Empty values are treated as unset. An unrecognised language is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
            if get(EXPORT_DIR_ENV).is_none() && dirs::document_dir().is_none() {
                config.export_dir = config.data_dir.clone();
            }
        }
        if let Some(dir) = get(EXPORT_DIR_ENV) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(language) = get(LANG_ENV).and_then(|v| v.parse().ok()) {
            config.language = language;
        }
        if let Some(filter) = get(LOG_ENV) {
            config.log_filter = filter;
        }
        config
    }

    /// Apply `--data-dir` and `--export-dir` flags.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, export_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = export_dir {
            self.export_dir = dir;
        }
        self
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// `<platform data dir>/suvidha`, or `./suvidha` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    FileKeyValueStore::default_dir().unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}
