//! Validation error types

use std::fmt;

/// Why a score submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object sent as JSON
    MalformedRequest { reason: &'static str },

    /// Required field absent from the body
    MissingField { field: &'static str },

    /// Name is not a string, blank, or too long
    InvalidName { reason: &'static str },

    /// Score is not a non-negative integer in range
    InvalidScore { reason: &'static str },
}

impl ValidationError {
    /// Stable machine-readable kind, sent as `code` in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "malformed_request",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidName { .. } => "invalid_name",
            Self::InvalidScore { .. } => "invalid_score",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRequest { reason } => write!(f, "malformed request: {}", reason),
            Self::MissingField { field } => write!(f, "missing required field '{}'", field),
            Self::InvalidName { reason } => write!(f, "invalid name: {}", reason),
            Self::InvalidScore { reason } => write!(f, "invalid score: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingField { field: "score" };
        assert_eq!(err.to_string(), "missing required field 'score'");
        assert_eq!(err.code(), "missing_field");
    }
}
