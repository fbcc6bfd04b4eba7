//! # Sahelis Core
//!
//! Core business logic and domain layer for the Sahelis account services.
//! This crate contains the account entity, the phone normalizer, the
//! registration validator and credential checker, the password reset flow,
//! repository interfaces, and the error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{CanonicalPhone, NewAccount, RegistrationRequest, User};
pub use errors::{AuthError, DomainError, DomainResult, FieldError, FieldErrors};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    AccountValidator, BcryptPasswordHasher, CredentialChecker, EmailService,
    JwtResetTokenService, PasswordHasher, PasswordPolicy, PasswordResetService, PhoneNormalizer,
    RegistrationService, ResetTokenService,
};
