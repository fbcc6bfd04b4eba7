//! Password reset by email
//!
//! A reset request emails a link embedding the account id and a signed,
//! time-limited token. The token is bound to the current password hash, so
//! it stops verifying as soon as the password is changed.

mod config;
mod service;
mod token;
mod traits;

#[cfg(test)]
mod tests;

pub use config::PasswordResetConfig;
pub use service::PasswordResetService;
pub use token::{JwtResetTokenService, ResetClaims};
pub use traits::{EmailService, ResetTokenService};
