//! Password reset endpoints
//!
//! The emailed link carries `{uid}/{token}`; the client first checks it with
//! GET, then posts the new password to the same path.

use actix_web::{web, HttpResponse};
use validator::Validate;

use sa_core::repositories::UserRepository;
use sa_core::services::{EmailService, PasswordHasher, ResetTokenService};
use sa_shared::types::ApiResponse;

use super::AppState;
use crate::dto::auth::{LinkCheckResponse, MessageResponse, PasswordResetRequest, SetPasswordRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/password-reset
pub async fn request_reset<U, H, T, E>(
    state: web::Data<AppState<U, H, T, E>>,
    request: web::Json<PasswordResetRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .password_reset
        .request_reset(&request.email, &state.public_base_url)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "We've emailed you instructions for setting your password",
        ))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/auth/password-reset/{uid}/{token}
pub async fn check_link<U, H, T, E>(
    state: web::Data<AppState<U, H, T, E>>,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    let (uid, token) = path.into_inner();

    match state.password_reset.check_link(&uid, &token).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::success(LinkCheckResponse { valid: true })),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/password-reset/{uid}/{token}
pub async fn confirm_reset<U, H, T, E>(
    state: web::Data<AppState<U, H, T, E>>,
    path: web::Path<(String, String)>,
    request: web::Json<SetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let (uid, token) = path.into_inner();

    match state
        .password_reset
        .confirm_reset(&uid, &token, &request.new_password1, &request.new_password2)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Your password has been set. You may go ahead and log in now",
        ))),
        Err(error) => handle_domain_error(error),
    }
}
