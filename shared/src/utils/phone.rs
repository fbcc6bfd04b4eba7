//! Phone number utilities
//!
//! Syntactic checks only. Numbering-plan validation lives in
//! `sa_core::services::phone`.

use once_cell::sync::Lazy;
use regex::Regex;

// Local number as typed on the registration form: digits only, no country code
static LOCAL_DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{7,15}$").expect("local digits pattern is valid"));

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"));

/// Remove common formatting characters, keeping digits and `+`
pub fn strip_formatting(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Whether `digits` is a 7 to 15 digit local number with no symbols
pub fn is_local_digits(digits: &str) -> bool {
    LOCAL_DIGITS_REGEX.is_match(digits)
}

/// Whether `phone` is syntactically E.164 (`+`, then up to 15 digits)
pub fn is_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask a phone number for logs, keeping only the last four digits
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}
