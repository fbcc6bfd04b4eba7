//! Canonical phone numbers from local digits and a country
//!
//! Numbering-plan rules (valid lengths, prefixes, trunk prefixes) come from
//! the `phonenumber` crate metadata.

use phonenumber::{country, Mode, PhoneNumber};
use sa_shared::utils::phone::{is_e164, is_local_digits, strip_formatting};

use crate::domain::value_objects::CanonicalPhone;
use crate::errors::AuthError;

/// Stateless phone normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNormalizer;

impl PhoneNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Combine local digits with an ISO 3166-1 alpha-2 country into a canonical number
    ///
    /// # Errors
    /// * `InvalidCountry` - the country code is not known to the numbering-plan tables
    /// * `InvalidPhoneNumber` - the digits are malformed or not valid under the country's plan
    ///
    /// # Example
    /// ```
    /// # use sa_core::services::phone::PhoneNormalizer;
    /// let phone = PhoneNormalizer::new().normalize("612345678", "FR").unwrap();
    /// assert_eq!(phone.as_str(), "+33612345678");
    /// ```
    pub fn normalize(&self, local_digits: &str, country_code: &str) -> Result<CanonicalPhone, AuthError> {
        let region = parse_country(country_code)?;

        if !is_local_digits(local_digits) {
            return Err(AuthError::InvalidPhoneNumber {
                reason: "phone number must contain 7 to 15 digits and nothing else".to_string(),
            });
        }

        let number = phonenumber::parse(Some(region), local_digits).map_err(|e| {
            AuthError::InvalidPhoneNumber {
                reason: format!("could not parse number for {}: {}", country_code.to_uppercase(), e),
            }
        })?;

        to_canonical(&number).ok_or_else(|| AuthError::InvalidPhoneNumber {
            reason: format!("not a valid number for {}", country_code.to_uppercase()),
        })
    }

    /// Validate an already-international number (`+225 01 23 45 67 89`) and return
    /// its canonical form
    ///
    /// Canonicalizing a canonical number returns it unchanged.
    pub fn canonicalize(&self, international: &str) -> Result<CanonicalPhone, AuthError> {
        let stripped = strip_formatting(international);
        if !is_e164(&stripped) {
            return Err(AuthError::InvalidPhoneNumber {
                reason: "phone number must start with + and the country calling code".to_string(),
            });
        }

        let number = phonenumber::parse(None, &stripped).map_err(|e| AuthError::InvalidPhoneNumber {
            reason: format!("could not parse number: {}", e),
        })?;

        to_canonical(&number).ok_or_else(|| AuthError::InvalidPhoneNumber {
            reason: "not a valid phone number".to_string(),
        })
    }
}

fn parse_country(country_code: &str) -> Result<country::Id, AuthError> {
    let code = country_code.trim().to_uppercase();
    if code.len() != 2 {
        return Err(AuthError::InvalidCountry {
            country: country_code.to_string(),
        });
    }
    code.parse::<country::Id>()
        .map_err(|_| AuthError::InvalidCountry {
            country: country_code.to_string(),
        })
}

fn to_canonical(number: &PhoneNumber) -> Option<CanonicalPhone> {
    if !phonenumber::is_valid(number) {
        return None;
    }
    let formatted = number.format().mode(Mode::E164).to_string();
    Some(CanonicalPhone::from_canonical(formatted))
}
