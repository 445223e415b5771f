//! Error types for buscar.
//!
//! All fallible operations return `Result<T, VizError>` instead of
//! panicking. Malformed input is rejected before any session state is
//! mutated.

use thiserror::Error;

/// Result type alias for buscar operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all buscar operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== Input Validation =====
    /// The supplied array was empty.
    #[error("Input error: array must contain at least one element")]
    EmptyArray,

    /// A non-finite value (NaN or infinity) was supplied.
    #[error("Input error: non-finite value at index {index}")]
    NonFiniteValue {
        /// Index of the offending element.
        index: usize,
    },

    /// A textual entry could not be parsed as a number.
    #[error("Input error: '{entry}' is not a valid number")]
    InvalidNumber {
        /// The entry that failed to parse.
        entry: String,
    },

    // ===== Session State =====
    /// A search was started while another was still in flight.
    #[error("A search is already in progress; finish or reset it first")]
    SearchInProgress,

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an invalid-number error from the offending entry.
    #[must_use]
    pub fn invalid_number(entry: impl Into<String>) -> Self {
        Self::InvalidNumber {
            entry: entry.into(),
        }
    }

    /// Check if this error is an input-validation failure.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyArray | Self::NonFiniteValue { .. } | Self::InvalidNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_detection() {
        assert!(VizError::EmptyArray.is_input_error());
        assert!(VizError::NonFiniteValue { index: 3 }.is_input_error());
        assert!(VizError::invalid_number("abc").is_input_error());
        assert!(!VizError::SearchInProgress.is_input_error());
        assert!(!VizError::config("bad").is_input_error());
    }

    #[test]
    fn test_empty_array_display() {
        let msg = VizError::EmptyArray.to_string();
        assert!(msg.contains("at least one element"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = VizError::NonFiniteValue { index: 2 };
        let msg = err.to_string();
        assert!(msg.contains("non-finite"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_invalid_number_display() {
        let err = VizError::invalid_number("five");
        let msg = err.to_string();
        assert!(msg.contains("five"));
        assert!(msg.contains("not a valid number"));
    }

    #[test]
    fn test_search_in_progress_display() {
        let msg = VizError::SearchInProgress.to_string();
        assert!(msg.contains("already in progress"));
    }

    #[test]
    fn test_error_config() {
        let err = VizError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_serialization() {
        let err = VizError::serialization("failed to serialize");
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
    }

    #[test]
    fn test_error_debug() {
        let err = VizError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
