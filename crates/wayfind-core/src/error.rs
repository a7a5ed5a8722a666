//! Error types for wayfind
//!
//! Searches themselves never fail: an unreachable goal is reported as `None`.
//! Errors come from loading and validating [`SearchOptions`](crate::SearchOptions).

mod macros;

use thiserror::Error;

/// Errors that can occur while preparing a search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to {operation} {target}: {reason}")]
    Io {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },
}

impl SearchError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SearchError::Io {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = SearchError::invalid_value("max_expansions", 0);
        assert_eq!(err.to_string(), "invalid max_expansions: 0");
    }

    #[test]
    fn test_io_operation_message() {
        let err = SearchError::io_operation("read", "/tmp/wayfind.toml", "not found");
        assert_eq!(
            err.to_string(),
            "failed to read /tmp/wayfind.toml: not found"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("max_expansions = ");
        let err: SearchError = parse.unwrap_err().into();
        assert!(matches!(err, SearchError::Toml(_)));
        assert!(err.to_string().starts_with("TOML error:"));
    }
}
