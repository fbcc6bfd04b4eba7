//! Registration pipeline

use std::sync::Arc;

use sa_shared::utils::phone::mask_phone;
use sa_shared::utils::validation::normalize_email;
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{NewAccount, RegistrationRequest};
use crate::errors::{DomainError, DomainResult, FieldErrors};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::phone::PhoneNormalizer;

use super::validator::{AccountCandidate, AccountValidator};

/// Creates accounts from raw registration input
///
/// Flow: normalize email, normalize phone, validate, hash, persist.
pub struct RegistrationService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    hasher: Arc<H>,
    normalizer: PhoneNormalizer,
    validator: AccountValidator<U>,
}

impl<U, H> RegistrationService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>, validator: AccountValidator<U>) -> Self {
        Self {
            user_repository,
            hasher,
            normalizer: PhoneNormalizer::new(),
            validator,
        }
    }

    /// Register a customer account
    ///
    /// # Returns
    /// * `Ok(User)` - The stored account
    /// * `Err(DomainError::Rejected)` - Every field violation found
    /// * `Err(DomainError::ConstraintViolation)` - A concurrent registration won the race
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<User> {
        self.register_with_flags(request, false).await
    }

    /// Register an account with the staff flag set
    pub async fn register_staff(&self, request: RegistrationRequest) -> DomainResult<User> {
        self.register_with_flags(request, true).await
    }

    async fn register_with_flags(&self, request: RegistrationRequest, is_staff: bool) -> DomainResult<User> {
        let email = request
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(normalize_email);

        let mut errors = FieldErrors::new();

        let phone = match self.normalizer.normalize(request.phone.trim(), &request.country) {
            Ok(phone) => Some(phone),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let candidate = AccountCandidate {
            first_name: request.first_name.trim(),
            last_name: request.last_name.trim(),
            phone: phone.as_ref(),
            email: email.as_deref(),
            password: &request.password,
            password_confirmation: &request.password_confirmation,
        };
        errors.extend(self.validator.validate(&candidate).await?);

        let phone = match (errors.is_empty(), phone) {
            (true, Some(phone)) => phone,
            _ => {
                info!(errors = errors.len(), "Registration rejected");
                return Err(DomainError::Rejected(errors));
            }
        };

        let password_hash = self.hasher.hash(&request.password)?;
        let account = NewAccount {
            phone,
            email,
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            country: request.country.trim().to_uppercase(),
            is_staff,
        };

        match self.user_repository.create(User::new(account, password_hash)).await {
            Ok(user) => {
                info!(user_id = %user.id, phone = %mask_phone(&user.phone), is_staff, "Account registered");
                Ok(user)
            }
            Err(DomainError::ConstraintViolation { constraint }) => {
                warn!(constraint = %constraint, "Registration lost a uniqueness race");
                Err(DomainError::ConstraintViolation { constraint })
            }
            Err(e) => Err(e),
        }
    }
}
