//! One-way password hashing

use crate::errors::DomainError;

/// Salted one-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Compare a plaintext attempt with a stored hash
    ///
    /// A malformed stored hash verifies as `false`.
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}
