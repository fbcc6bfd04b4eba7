//! Account entity representing a registered Sahelis customer or staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::NewAccount;

/// Maximum length, in characters, of the first and last name
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum length, in characters, of a stored email address
pub const MAX_EMAIL_LENGTH: usize = 100;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, embedded in password-reset links
    pub id: Uuid,

    /// Canonical E.164 phone number, used as the login identifier
    pub phone: String,

    /// Normalized email address, unique when present
    pub email: Option<String>,

    pub first_name: String,

    pub last_name: String,

    /// ISO 3166-1 alpha-2 country code (upper case)
    pub country: String,

    /// One-way salted password hash
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Inactive accounts cannot log in
    pub is_active: bool,

    pub is_staff: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an active account from validated registration fields
    pub fn new(account: NewAccount, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone: account.phone.into_inner(),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            country: account.country,
            password_hash,
            is_active: true,
            is_staff: account.is_staff,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the password hash after a reset
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Checks if the account is allowed to authenticate
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}
