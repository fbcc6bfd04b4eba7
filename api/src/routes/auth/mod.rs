//! Account route handlers
//!
//! - Registration
//! - Login with phone number and password
//! - Password reset by email (request, link check, new password)

pub mod login;
pub mod password_reset;
pub mod register;

use std::sync::Arc;

use sa_core::repositories::UserRepository;
use sa_infra::database::DatabasePool;
use sa_core::services::{
    AccountValidator, CredentialChecker, EmailService, PasswordHasher, PasswordPolicy,
    PasswordResetConfig, PasswordResetService, PhoneNormalizer, RegistrationService,
    ResetTokenService,
};

/// Application state that holds shared services
pub struct AppState<U, H, T, E>
where
    U: UserRepository,
    H: PasswordHasher,
    T: ResetTokenService,
    E: EmailService,
{
    pub registration: Arc<RegistrationService<U, H>>,
    pub credentials: Arc<CredentialChecker<U, H>>,
    pub password_reset: Arc<PasswordResetService<U, H, T, E>>,
    pub normalizer: PhoneNormalizer,
    /// Public origin used to build password reset links
    pub public_base_url: String,
    /// Account store label reported by `/health`
    pub store: String,
    /// Pool pinged by `/health` when accounts live in MySQL
    pub database: Option<DatabasePool>,
}

impl<U, H, T, E> AppState<U, H, T, E>
where
    U: UserRepository,
    H: PasswordHasher,
    T: ResetTokenService,
    E: EmailService,
{
    /// Wire every account service around one repository and hasher
    pub fn new(
        user_repository: Arc<U>,
        hasher: Arc<H>,
        tokens: Arc<T>,
        email_service: Arc<E>,
        policy: PasswordPolicy,
        public_base_url: impl Into<String>,
        store: impl Into<String>,
    ) -> Self {
        let registration = RegistrationService::new(
            user_repository.clone(),
            hasher.clone(),
            AccountValidator::new(user_repository.clone(), policy.clone()),
        );
        let credentials = CredentialChecker::new(user_repository.clone(), hasher.clone());
        let password_reset = PasswordResetService::new(
            user_repository.clone(),
            hasher,
            tokens,
            email_service,
            AccountValidator::new(user_repository, policy),
            PasswordResetConfig::default(),
        );

        Self {
            registration: Arc::new(registration),
            credentials: Arc::new(credentials),
            password_reset: Arc::new(password_reset),
            normalizer: PhoneNormalizer::new(),
            public_base_url: public_base_url.into(),
            store: store.into(),
            database: None,
        }
    }

    /// Report the health of `pool` on `/health`
    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
