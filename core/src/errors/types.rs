//! Field-attributable error kinds for registration, login and password reset
//!
//! Every kind carries a stable machine-readable code and the form field it
//! is reported against by default.

use std::fmt;
use thiserror::Error;

/// Field name used for errors not attached to a single input
pub const NON_FIELD: &str = "non_field_errors";

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone number: {reason}")]
    InvalidPhoneNumber { reason: String },

    #[error("Unknown country: {country}")]
    InvalidCountry { country: String },

    #[error("The two password fields didn't match")]
    PasswordMismatch,

    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("An account with this phone number already exists")]
    DuplicatePhone,

    #[error("Password is too weak: {reason}")]
    WeakPassword { reason: String },

    #[error("Invalid phone number or password")]
    InvalidCredentials,

    #[error("No account found with this email")]
    AccountNotFound,

    #[error("The password reset link is invalid or has expired")]
    InvalidResetLink,

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl AuthError {
    /// Stable code for client identification
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidPhoneNumber { .. } => "INVALID_PHONE_NUMBER",
            AuthError::InvalidCountry { .. } => "INVALID_COUNTRY",
            AuthError::PasswordMismatch => "PASSWORD_MISMATCH",
            AuthError::DuplicateEmail => "DUPLICATE_EMAIL",
            AuthError::DuplicatePhone => "DUPLICATE_PHONE",
            AuthError::WeakPassword { .. } => "WEAK_PASSWORD",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AuthError::InvalidResetLink => "INVALID_RESET_LINK",
            AuthError::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    /// Registration-form field this error is reported against
    pub fn field(&self) -> &str {
        match self {
            AuthError::InvalidPhoneNumber { .. } | AuthError::DuplicatePhone => "phone",
            AuthError::InvalidCountry { .. } => "country",
            AuthError::PasswordMismatch => "password_confirmation",
            AuthError::WeakPassword { .. } => "password",
            AuthError::DuplicateEmail | AuthError::AccountNotFound => "email",
            AuthError::InvalidField { field, .. } => field,
            AuthError::InvalidCredentials | AuthError::InvalidResetLink => NON_FIELD,
        }
    }
}

/// A single error attributed to an input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub error: AuthError,
}

/// Ordered collection of field errors reported together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against its default field
    pub fn push(&mut self, error: AuthError) {
        let field = error.field().to_string();
        self.push_for(field, error);
    }

    /// Record an error against an explicit field
    pub fn push_for(&mut self, field: impl Into<String>, error: AuthError) {
        self.errors.push(FieldError {
            field: field.into(),
            error,
        });
    }

    /// Append every error of `other`
    pub fn extend(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether any recorded error equals `error`
    pub fn contains(&self, error: &AuthError) -> bool {
        self.errors.iter().any(|e| &e.error == error)
    }

    /// Whether any recorded error has the given code
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.error.code() == code)
    }

    /// Errors recorded against `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a AuthError> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| &e.error)
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<AuthError> for FieldErrors {
    fn from(error: AuthError) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(error);
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.error)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
