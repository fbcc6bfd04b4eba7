//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, FieldError, FieldErrors, NON_FIELD};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more inputs were rejected; every violation is listed
    #[error("Validation failed: {0}")]
    Rejected(FieldErrors),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A uniqueness or integrity rule fired at write time
    #[error("Constraint violation: {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("Email delivery failed: {message}")]
    Delivery { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        DomainError::Rejected(errors)
    }
}

impl DomainError {
    /// Field errors carried by this error, if it is a field-level rejection
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            DomainError::Rejected(errors) => Some(errors.clone()),
            DomainError::Auth(error) => Some(FieldErrors::from(error.clone())),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
