//! Common validation utilities

/// Normalize an email address by trimming it and lower-casing the domain part
///
/// The local part is kept as typed. Inputs without `@` are only trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check that a string has at most `max` characters
    pub fn max_chars(value: &str, max: usize) -> bool {
        value.chars().count() <= max
    }

    /// Check if a string contains at least one alphabetic character
    pub fn has_letter(value: &str) -> bool {
        value.chars().any(|c| c.is_alphabetic())
    }

    /// Check if a string contains at least one ASCII digit
    pub fn has_digit(value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_digit())
    }
}
