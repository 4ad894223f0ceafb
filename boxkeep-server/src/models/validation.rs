//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric field below zero
    Negative { field: &'static str },

    /// Value doesn't parse into the expected shape
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Negative { field: "quantity" };
        assert_eq!(err.to_string(), "quantity cannot be negative");

        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "expected an integer",
        };
        assert_eq!(err.to_string(), "id: expected an integer");
    }
}
