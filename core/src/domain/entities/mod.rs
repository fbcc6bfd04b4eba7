//! Domain entities representing core business objects.

pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use user::{User, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
