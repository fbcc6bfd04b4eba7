//! Configuration for the password reset service

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Subject line of the reset email
    pub subject: String,
    /// Site name shown in the email body
    pub site_name: String,
    /// Path segment of the confirmation link, between the base URL and the id
    pub confirm_path: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            subject: "Password reset".to_string(),
            site_name: "Sahelis Beauty".to_string(),
            confirm_path: "password-reset-confirm".to_string(),
        }
    }
}
