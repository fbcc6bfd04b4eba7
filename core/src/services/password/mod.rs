//! Password hashing and strength policy

mod hasher;
mod policy;

pub use hasher::{BcryptPasswordHasher, PasswordHasher};
pub use policy::{PasswordPolicy, MIN_PASSWORD_LENGTH};
