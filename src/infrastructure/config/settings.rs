//! Application configuration loading and validation.
//!
//! Every section is optional; a missing file yields the defaults, which
//! match a stock single-file deployment (`employee_data.db`, 10 minute
//! snapshot cache).
//!
//! # Example
//!
//! ```no_run
//! use staffsurvey::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("staffsurvey.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::adapter::outbound::sqlite::database::connection::{
    ConnectionOptions, DEFAULT_BUSY_TIMEOUT_MS,
};
use crate::application::report::DEFAULT_SHEET_NAME;
use crate::application::DEFAULT_SNAPSHOT_TTL;
use crate::error::{ConfigError, Result};

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "employee_data.db";

/// Longest sheet name Excel accepts.
const MAX_SHEET_NAME_LEN: usize = 31;
const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// SQLite settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub path: String,
    /// `PRAGMA busy_timeout` in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

/// Employees snapshot cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_SNAPSHOT_TTL.as_secs(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub sheet_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, or use defaults if it does not
    /// exist.
    ///
    /// # Errors
    /// Same as [`Config::load`] for a file that exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        let sheet_name = &self.report.sheet_name;
        if sheet_name.is_empty() || sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ConfigError::InvalidValue {
                field: "report.sheet_name",
                reason: format!("must be 1 to {MAX_SHEET_NAME_LEN} characters"),
            }
            .into());
        }
        if sheet_name.contains(SHEET_NAME_FORBIDDEN) {
            return Err(ConfigError::InvalidValue {
                field: "report.sheet_name",
                reason: "cannot contain any of []:*?/\\".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.database.path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.database.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.cache.ttl(), Duration::from_secs(600));
        assert_eq!(config.report.sheet_name, "BaoCaoNhanSu");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
[database]
path = "/tmp/survey.db"

[cache]
ttl_secs = 30

[report]
sheet_name = "Staff"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.database.path, "/tmp/survey.db");
        assert_eq!(config.database.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.cache.ttl_secs, 30);
        assert_eq!(config.report.sheet_name, "Staff");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let err = Config::parse_toml("[cache]\nttl_secs = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "cache.ttl_secs",
                ..
            })
        ));
    }

    #[test]
    fn bad_sheet_names_are_rejected() {
        assert!(Config::parse_toml("[report]\nsheet_name = \"a/b\"\n").is_err());
        assert!(Config::parse_toml("[report]\nsheet_name = \"\"\n").is_err());
        let long = "x".repeat(32);
        assert!(Config::parse_toml(&format!("[report]\nsheet_name = \"{long}\"\n")).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = Config::parse_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("[database\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/definitely/not/here/staffsurvey.toml").unwrap();
        assert_eq!(config.database.path, DEFAULT_DATABASE_PATH);
    }
}
