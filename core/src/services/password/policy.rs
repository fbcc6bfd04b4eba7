//! Minimum password strength

use sa_shared::config::PasswordConfig;
use sa_shared::utils::validation::validators::{has_digit, has_letter};

use crate::errors::AuthError;

/// Shortest minimum length a policy can be configured with
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum-strength rules applied to new passwords
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// `min_length` below `MIN_PASSWORD_LENGTH` is raised to it
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(MIN_PASSWORD_LENGTH),
        }
    }

    /// Every rule the password breaks, in a fixed order
    pub fn violations(&self, password: &str) -> Vec<AuthError> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(AuthError::WeakPassword {
                reason: format!("must be at least {} characters long", self.min_length),
            });
        }
        if !has_letter(password) {
            violations.push(AuthError::WeakPassword {
                reason: "must contain at least one letter".to_string(),
            });
        }
        if !has_digit(password) {
            violations.push(AuthError::WeakPassword {
                reason: "must contain at least one digit".to_string(),
            });
        }

        violations
    }

    pub fn is_acceptable(&self, password: &str) -> bool {
        self.violations(password).is_empty()
    }
}

impl From<&PasswordConfig> for PasswordPolicy {
    fn from(config: &PasswordConfig) -> Self {
        Self::new(config.min_length)
    }
}
