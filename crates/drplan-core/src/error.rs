//! Error types for DR Plan.

/// Errors that can occur across the DR Plan crates.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, when known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Requested record does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. "resource"
        kind: &'static str,
        /// Identity that was looked up
        id: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for DR Plan operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<I: std::fmt::Display>(kind: &'static str, id: I) -> Self {
        Error::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error was caused by the caller's input.
    ///
    /// Caller errors (validation, not-found) are reported back with detail;
    /// everything else is an internal failure and is reported generically.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::NotFound { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = Error::validation("rating out of range");
        assert_eq!(err.to_string(), "Validation error: rating out of range");
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("email", "must be a valid email address");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("email".to_string()));
        assert_eq!(message, "must be a valid email address");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("resource", 42);
        assert_eq!(err.to_string(), "resource not found: 42");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("port cannot be zero");
        assert_eq!(err.to_string(), "Configuration error: port cannot be zero");
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(Error::validation("x").is_caller_error());
        assert!(Error::not_found("testimonial", 9).is_caller_error());
        assert!(!Error::config("x").is_caller_error());

        let io_err: Error = std::io::Error::other("disk gone").into();
        assert!(!io_err.is_caller_error());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{nope}").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
