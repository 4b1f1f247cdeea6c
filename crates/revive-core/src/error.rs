//! Error types for the revive core library
//!
//! Revivers themselves never fail: a value that does not fit is handed back
//! unchanged. Errors only come from the surfaces around them, namely parsing
//! the JSON text that is walked and building a reviver set from configuration.

use thiserror::Error;

/// Main error type for revive operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing errors, either of a document or of a configuration
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a `serde_json` failure with a short description of what was being parsed
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error, optionally naming the offending field
    pub fn configuration(message: impl Into<String>, field: Option<&str>) -> Self {
        Error::Configuration {
            message: message.into(),
            field: field.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::json("failed to parse document", source);
        assert!(err.to_string().contains("failed to parse document"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_configuration_error_field() {
        let err = Error::configuration("no revivers configured", Some("currency"));
        match err {
            Error::Configuration { message, field } => {
                assert_eq!(message, "no revivers configured");
                assert_eq!(field.as_deref(), Some("currency"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
