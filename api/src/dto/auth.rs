use chrono::{DateTime, Utc};
use sa_core::domain::entities::User;
use sa_core::domain::value_objects::RegistrationRequest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Sign-up form payload
///
/// Only payload-size limits are checked here; every business rule (names,
/// phone plan, uniqueness, password strength) is reported by the
/// registration service so that all field errors come back together.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 255, message = "First name is too long"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "Last name is too long"))]
    pub last_name: String,

    /// ISO 3166-1 alpha-2 code, e.g. "FR" or "CI"
    #[validate(length(max = 8, message = "Country code is too long"))]
    pub country: String,

    /// Local digits without the country code, e.g. "612345678"
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Email is too long"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Password is too long"))]
    pub password: String,

    #[validate(length(max = 128, message = "Password is too long"))]
    pub password_confirmation: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(request: RegisterRequest) -> Self {
        RegistrationRequest {
            first_name: request.first_name,
            last_name: request.last_name,
            country: request.country,
            phone: request.phone,
            email: request.email,
            password: request.password,
            password_confirmation: request.password_confirmation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    /// Canonical E.164 phone number the account logs in with
    pub phone: String,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            phone: user.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// International number as typed, e.g. "+33 6 12 34 56 78"
    #[validate(length(min = 1, max = 32, message = "Phone number is required"))]
    pub phone: String,

    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

/// Account data returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub phone: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            phone: user.phone.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            country: user.country.clone(),
            is_staff: user.is_staff,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

/// New password form submitted through a reset link
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetPasswordRequest {
    #[validate(length(max = 128, message = "Password is too long"))]
    pub new_password1: String,

    #[validate(length(max = 128, message = "Password is too long"))]
    pub new_password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheckResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_missing_email() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "first_name": "Awa",
            "last_name": "Diallo",
            "country": "FR",
            "phone": "612345678",
            "password": "abcdefg1",
            "password_confirmation": "abcdefg1"
        }))
        .unwrap();

        assert!(request.email.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_password_reset_request_checks_email_shape() {
        let bad = PasswordResetRequest {
            email: "not-an-email".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let good = PasswordResetRequest {
            email: "awa@example.com".to_string(),
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            phone: String::new(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("password"));
    }
}
