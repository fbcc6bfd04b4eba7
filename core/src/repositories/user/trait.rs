//! User repository trait defining the interface for account persistence.
//!
//! Uniqueness of phone and email is enforced by the implementation at write
//! time. Services pre-check through the finders for friendlier errors, but
//! `create` remains the final arbiter and reports a losing race as
//! `DomainError::ConstraintViolation`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use sa_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(user) = repo.find_by_phone("+33612345678").await? {
///     println!("Account {} belongs to {}", user.id, user.full_name());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(User)` - The stored account
    /// * `Err(DomainError::ConstraintViolation)` - Phone or email already taken
    /// * `Err(DomainError::Database)` - Storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find an account by its canonical phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find an account by its normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Replace the stored password hash
    ///
    /// # Returns
    /// * `Ok(())` - Hash replaced
    /// * `Err(DomainError::NotFound)` - No account with this id
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError>;
}
