//! Calculator configuration.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock behavior: Brazilian Portuguese separators and a 50-entry history
//! stored under `eduCalcHistory`.
//!
//! # Example
//!
//! ```rust
//! use educalc::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     [locale]
//!     grouping_separator = ","
//!     decimal_separator = "."
//!
//!     [history]
//!     limit = 20
//! "#).unwrap();
//!
//! assert_eq!(config.history.limit, 20);
//! assert_eq!(config.history.storage_key, "eduCalcHistory");
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::NumberLocale;
use crate::history::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Key the history has always been stored under.
pub const DEFAULT_STORAGE_KEY: &str = "eduCalcHistory";

/// Top-level configuration.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separators used for display and history text
    pub locale: NumberLocale,
    pub history: HistoryConfig,
}

/// History log settings.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries kept, newest first
    pub limit: usize,
    /// Key the log is persisted under
    pub storage_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Config {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.into_validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`Config::load`], but falls back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.history.limit == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryLimit)
        } else {
            Validation::success(())
        });

        checks.push(
            if self.locale.grouping_separator == self.locale.decimal_separator {
                Validation::fail(ConfigViolation::SameSeparators(
                    self.locale.decimal_separator,
                ))
            } else {
                Validation::success(())
            },
        );

        checks.push(if self.history.storage_key.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyStorageKey)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    fn into_validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("educalc-config-{}", Uuid::now_v7()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn empty_text_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.locale, NumberLocale::pt_br());
        assert_eq!(config.history.limit, 50);
        assert_eq!(config.history.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [locale]
            decimal_separator = "."
            grouping_separator = " "
            "#,
        )
        .unwrap();
        assert_eq!(config.locale.decimal_separator, '.');
        assert_eq!(config.locale.grouping_separator, ' ');
        assert_eq!(config.history, HistoryConfig::default());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = Config {
            locale: NumberLocale {
                grouping_separator: ',',
                decimal_separator: ',',
            },
            history: HistoryConfig {
                limit: 0,
                storage_key: "  ".to_string(),
            },
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroHistoryLimit)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::SameSeparators(','))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyStorageKey)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn invalid_values_are_rejected_on_parse() {
        let result = Config::from_toml_str("[history]\nlimit = 0\n");
        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroHistoryLimit]);
            }
            other => panic!("Expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::from_toml_str("[history\nlimit = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = TempDir::new();
        let path = dir.0.join("config.toml");
        fs::write(
            &path,
            "[locale]\ngrouping_separator = \",\"\ndecimal_separator = \".\"\n\n[history]\nlimit = 10\nstorage_key = \"calc\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.locale, NumberLocale::en_us());
        assert_eq!(config.history.limit, 10);
        assert_eq!(config.history.storage_key, "calc");
        assert_eq!(Config::load_or_default(&path), config);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new();
        let result = Config::load(dir.0.join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/educalc/config.toml");
        assert_eq!(config, Config::default());
    }
}
