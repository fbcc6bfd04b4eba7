//! Registration input and validated account fields

use serde::{Deserialize, Serialize};

use super::phone_number::CanonicalPhone;

/// Raw registration input, as submitted on the sign-up form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Local phone digits without country code
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}

/// Account fields that passed validation and are ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub phone: CanonicalPhone,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub is_staff: bool,
}
