//! Login credential verification

use std::sync::Arc;

use sa_shared::utils::phone::mask_phone;
use tracing::{debug, info};

use crate::domain::entities::user::User;
use crate::domain::value_objects::CanonicalPhone;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

/// Verifies a phone + password login attempt
///
/// Unknown phone, wrong password and inactive account all fail with the same
/// `InvalidCredentials` error. An unknown phone still pays for one hash
/// comparison so response time does not reveal which numbers are registered.
pub struct CredentialChecker<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    hasher: Arc<H>,
    dummy_hash: Option<String>,
}

impl<U, H> CredentialChecker<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>) -> Self {
        let dummy_hash = hasher.hash("sahelis-unknown-account").ok();
        Self {
            user_repository,
            hasher,
            dummy_hash,
        }
    }

    /// Returns the authenticated account
    pub async fn check(&self, phone: &CanonicalPhone, password: &str) -> DomainResult<User> {
        let masked = mask_phone(phone.as_str());

        let Some(user) = self.user_repository.find_by_phone(phone.as_str()).await? else {
            match &self.dummy_hash {
                Some(hash) => {
                    self.hasher.verify(password, hash);
                }
                None => {
                    let _ = self.hasher.hash(password);
                }
            }
            debug!(phone = %masked, "Login rejected: unknown phone");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(phone = %masked, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.can_login() {
            debug!(phone = %masked, "Login rejected: inactive account");
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, phone = %masked, "Login succeeded");
        Ok(user)
    }
}
