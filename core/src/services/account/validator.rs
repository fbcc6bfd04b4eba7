//! Pre-creation account validation

use std::sync::Arc;

use validator::validate_email;

use crate::domain::entities::user::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::domain::value_objects::CanonicalPhone;
use crate::errors::{AuthError, DomainResult, FieldErrors};
use crate::repositories::UserRepository;
use crate::services::password::PasswordPolicy;

/// Candidate account fields, after phone and email normalization
#[derive(Debug, Clone, Copy)]
pub struct AccountCandidate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    /// `None` when the phone failed normalization; the duplicate check is skipped
    pub phone: Option<&'a CanonicalPhone>,
    pub email: Option<&'a str>,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

/// Validates a candidate account against the store and the password policy
///
/// Every check runs; the caller receives all violations at once. The store's
/// unique constraints still decide races between concurrent registrations.
pub struct AccountValidator<U: UserRepository> {
    user_repository: Arc<U>,
    policy: PasswordPolicy,
}

impl<U: UserRepository> AccountValidator<U> {
    pub fn new(user_repository: Arc<U>, policy: PasswordPolicy) -> Self {
        Self {
            user_repository,
            policy,
        }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Collect every violation for `candidate`
    ///
    /// Only storage failures are returned as `Err`.
    pub async fn validate(&self, candidate: &AccountCandidate<'_>) -> DomainResult<FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, value) in [("first_name", candidate.first_name), ("last_name", candidate.last_name)] {
            if let Some(error) = check_name(field, value) {
                errors.push(error);
            }
        }

        if candidate.password != candidate.password_confirmation {
            errors.push(AuthError::PasswordMismatch);
        }

        if let Some(email) = candidate.email {
            if let Some(error) = check_email_format(email) {
                errors.push(error);
            } else if self.user_repository.find_by_email(email).await?.is_some() {
                errors.push(AuthError::DuplicateEmail);
            }
        }

        if let Some(phone) = candidate.phone {
            if self.user_repository.find_by_phone(phone.as_str()).await?.is_some() {
                errors.push(AuthError::DuplicatePhone);
            }
        }

        for violation in self.policy.violations(candidate.password) {
            errors.push(violation);
        }

        Ok(errors)
    }

    /// Mismatch and strength checks for a replacement password
    ///
    /// Errors are reported against `new_password1` / `new_password2`.
    pub fn validate_new_password(&self, password: &str, confirmation: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if password != confirmation {
            errors.push_for("new_password2", AuthError::PasswordMismatch);
        }
        for violation in self.policy.violations(password) {
            errors.push_for("new_password1", violation);
        }
        errors
    }
}

fn check_name(field: &str, value: &str) -> Option<AuthError> {
    if value.trim().is_empty() {
        return Some(AuthError::InvalidField {
            field: field.to_string(),
            reason: "this field is required".to_string(),
        });
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Some(AuthError::InvalidField {
            field: field.to_string(),
            reason: format!("must be at most {} characters", MAX_NAME_LENGTH),
        });
    }
    None
}

fn check_email_format(email: &str) -> Option<AuthError> {
    if !validate_email(email) {
        return Some(AuthError::InvalidField {
            field: "email".to_string(),
            reason: "enter a valid email address".to_string(),
        });
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Some(AuthError::InvalidField {
            field: "email".to_string(),
            reason: format!("must be at most {} characters", MAX_EMAIL_LENGTH),
        });
    }
    None
}
