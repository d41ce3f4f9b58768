use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("table shape error: expected {expected} cells, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Error::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_errors_map_to_database_variant() {
        let err: Error = diesel::result::Error::NotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().starts_with("database error"));
    }

    #[test]
    fn config_errors_are_transparent() {
        let err: Error = ConfigError::InvalidValue {
            field: "cache.ttl_secs",
            reason: "must be greater than zero".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid value for cache.ttl_secs: must be greater than zero"
        );
    }

    #[test]
    fn shape_error_reports_both_widths() {
        let err = Error::Shape {
            expected: 6,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "table shape error: expected 6 cells, got 4"
        );
    }
}
