//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable failures surfaced at the UI
/// boundary. The store itself never returns these; form validation and id
/// parsing do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Submitted fields were missing or out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested product was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether this error should be shown next to the submitting form.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("stock must be greater than 0");
        assert_eq!(err.to_string(), "validation failed: stock must be greater than 0");
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_is_not_a_validation_error() {
        assert!(!DomainError::not_found().is_validation());
    }
}
