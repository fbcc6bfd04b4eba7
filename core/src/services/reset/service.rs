//! Password reset service implementation

use std::sync::Arc;

use sa_shared::utils::validation::normalize_email;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, FieldErrors};
use crate::repositories::UserRepository;
use crate::services::account::AccountValidator;
use crate::services::password::PasswordHasher;

use super::config::PasswordResetConfig;
use super::traits::{EmailService, ResetTokenService};

/// Password reset flow: request a link, check it, set a new password
pub struct PasswordResetService<U, H, T, E>
where
    U: UserRepository,
    H: PasswordHasher,
    T: ResetTokenService,
    E: EmailService,
{
    user_repository: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    email_service: Arc<E>,
    validator: AccountValidator<U>,
    config: PasswordResetConfig,
}

impl<U, H, T, E> PasswordResetService<U, H, T, E>
where
    U: UserRepository,
    H: PasswordHasher,
    T: ResetTokenService,
    E: EmailService,
{
    pub fn new(
        user_repository: Arc<U>,
        hasher: Arc<H>,
        tokens: Arc<T>,
        email_service: Arc<E>,
        validator: AccountValidator<U>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            user_repository,
            hasher,
            tokens,
            email_service,
            validator,
            config,
        }
    }

    /// Email a reset link to the account registered under `email`
    ///
    /// `base_url` is the public origin the link points at, e.g.
    /// `https://sahelisbeauty.com`.
    ///
    /// # Returns
    /// * `Ok(())` - Email handed to the sender
    /// * `Err(DomainError::Rejected)` - No account uses this email (`AccountNotFound` on `email`)
    /// * `Err(DomainError::Delivery)` - The email could not be sent
    pub async fn request_reset(&self, email: &str, base_url: &str) -> DomainResult<()> {
        let email = normalize_email(email);

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            info!("Password reset requested for unknown email");
            return Err(FieldErrors::from(AuthError::AccountNotFound).into());
        };

        let token = self.tokens.issue(&user)?;
        let link = format!(
            "{}/{}/{}/{}/",
            base_url.trim_end_matches('/'),
            self.config.confirm_path,
            user.id,
            token
        );

        self.email_service
            .send(&email, &self.config.subject, &self.render_body(&user, &link))
            .await
            .map_err(|message| {
                error!(user_id = %user.id, error = %message, "Password reset email failed");
                DomainError::Delivery { message }
            })?;

        info!(user_id = %user.id, "Password reset email sent");
        Ok(())
    }

    /// Resolve a reset link to its account
    ///
    /// Unknown ids, malformed ids and tokens that fail verification all yield
    /// `InvalidResetLink`.
    pub async fn check_link(&self, uid: &str, token: &str) -> DomainResult<User> {
        let Ok(id) = Uuid::parse_str(uid) else {
            return Err(AuthError::InvalidResetLink.into());
        };

        match self.user_repository.find_by_id(id).await? {
            Some(user) if self.tokens.verify(&user, token) => Ok(user),
            Some(_) => {
                warn!(user_id = %id, "Reset link with invalid or expired token");
                Err(AuthError::InvalidResetLink.into())
            }
            None => Err(AuthError::InvalidResetLink.into()),
        }
    }

    /// Set a new password through a reset link
    pub async fn confirm_reset(
        &self,
        uid: &str,
        token: &str,
        new_password: &str,
        confirmation: &str,
    ) -> DomainResult<()> {
        let user = self.check_link(uid, token).await?;

        self.validator
            .validate_new_password(new_password, confirmation)
            .into_result()?;

        let password_hash = self.hasher.hash(new_password)?;
        self.user_repository
            .update_password_hash(user.id, &password_hash)
            .await?;

        info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }

    fn render_body(&self, user: &User, link: &str) -> String {
        format!(
            "Hello {},\n\n\
             You asked to reset the password of your {} account.\n\
             Follow this link to choose a new password:\n\n\
             {}\n\n\
             If you did not ask for this, you can ignore this email.\n",
            user.first_name, self.config.site_name, link
        )
    }
}
