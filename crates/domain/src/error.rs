//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StaffdeskError`] via `#[from]` or an explicit `From` impl.

use crate::employee::EmployeeField;

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum StaffdeskError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty or blank.
    #[error("{0} is required")]
    MissingField(EmployeeField),

    /// The identifier is not a non-negative integer.
    #[error("invalid employee id: {0:?}")]
    InvalidId(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_missing_field_message() {
        let err = ValidationError::MissingField(EmployeeField::Department);
        assert_eq!(err.to_string(), "department is required");
    }

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Employee",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Employee 7 not found");
    }

    #[test]
    fn should_convert_validation_error_into_staffdesk_error() {
        let err: StaffdeskError = ValidationError::InvalidId("abc".to_string()).into();
        assert!(matches!(
            err,
            StaffdeskError::Validation(ValidationError::InvalidId(_))
        ));
    }
}
