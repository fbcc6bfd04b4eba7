//! Traits for email delivery and reset-token integration

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Trait for outgoing email integration
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a plain-text email
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}

/// Trait for signed password-reset tokens
pub trait ResetTokenService: Send + Sync {
    /// Issue a token for the account in its current state
    fn issue(&self, user: &User) -> Result<String, DomainError>;
    /// Check a token against the account in its current state
    fn verify(&self, user: &User, token: &str) -> bool;
}
