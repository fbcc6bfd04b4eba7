//! Business services containing domain logic and use cases.

pub mod account;
pub mod password;
pub mod phone;
pub mod reset;

// Re-export commonly used types
pub use account::{AccountCandidate, AccountValidator, CredentialChecker, RegistrationService};
pub use password::{BcryptPasswordHasher, PasswordHasher, PasswordPolicy};
pub use phone::PhoneNormalizer;
pub use reset::{
    EmailService, JwtResetTokenService, PasswordResetConfig, PasswordResetService,
    ResetTokenService,
};
