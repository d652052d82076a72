//! Error types for number conversion
//!
//! Every failure is reported to the caller; nothing is coerced or truncated.

use thiserror::Error;

/// Main error type for number conversion
#[derive(Error, Debug)]
pub enum NumberError {
    /// The input is not a valid signed decimal literal
    #[error("Malformed number '{input}': {message}")]
    Malformed { input: String, message: String },

    /// The integer part needs more scale groups than the scale table names
    #[error(
        "Number too large: integer part has {digits} digits, at most {max_digits} are supported"
    )]
    MagnitudeOverflow { digits: usize, max_digits: usize },

    /// Internal setup errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl NumberError {
    /// Create a new malformed input error
    pub fn malformed(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a new magnitude overflow error
    pub fn magnitude_overflow(digits: usize, max_digits: usize) -> Self {
        Self::MagnitudeOverflow { digits, max_digits }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NumberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NumberError::malformed("12.3.4", "more than one decimal point");
        assert_eq!(
            err.to_string(),
            "Malformed number '12.3.4': more than one decimal point"
        );

        let err = NumberError::magnitude_overflow(103, 102);
        assert!(err.to_string().contains("103 digits"));
        assert!(err.to_string().contains("at most 102"));
    }
}
