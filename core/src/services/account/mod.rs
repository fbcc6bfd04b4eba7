//! Account services
//!
//! - `validator` - uniqueness and password checks before an account is created
//! - `credentials` - phone + password login check
//! - `registration` - the full sign-up pipeline, from raw form input to a stored account

mod credentials;
mod registration;
mod validator;

#[cfg(test)]
mod tests;

pub use credentials::CredentialChecker;
pub use registration::RegistrationService;
pub use validator::{AccountCandidate, AccountValidator};
