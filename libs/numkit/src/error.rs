//! numkit Error Types

use thiserror::Error;

/// Result type for numkit operations
pub type Result<T> = std::result::Result<T, NumkitError>;

/// Errors reported by the codec, numeral and random helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumkitError {
    /// Hex numeral contains a character outside `0-9`, `A-F`
    #[error("Invalid hex digit '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// Strict mode rejects an empty numeral
    #[error("Empty hex numeral")]
    EmptyNumeral,

    /// Numeral value does not fit in the target integer
    #[error("Numeral overflow: {0}")]
    Overflow(String),

    /// Lower bound exceeds upper bound
    #[error("Invalid range: lower bound {low} exceeds upper bound {high}")]
    InvalidRange { low: String, high: String },

    /// IO errors from stream sources and sinks
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for NumkitError {
    fn from(err: std::io::Error) -> Self {
        NumkitError::Io(err.to_string())
    }
}

// Helper methods for creating errors
impl NumkitError {
    pub fn invalid_digit(digit: char, position: usize) -> Self {
        NumkitError::InvalidDigit { digit, position }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        NumkitError::Overflow(msg.into())
    }

    pub fn invalid_range(low: impl ToString, high: impl ToString) -> Self {
        NumkitError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        NumkitError::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        NumkitError::Config(msg.into())
    }

    /// Check if this error was caused by malformed numeral input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NumkitError::InvalidDigit { .. } | NumkitError::EmptyNumeral | NumkitError::Overflow(_)
        )
    }
}
