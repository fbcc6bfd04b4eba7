//! Value objects representing immutable domain concepts.

pub mod phone_number;
pub mod registration;

// Re-export commonly used types
pub use phone_number::CanonicalPhone;
pub use registration::{NewAccount, RegistrationRequest};
