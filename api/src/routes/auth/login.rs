use actix_web::{web, HttpResponse};
use validator::Validate;

use sa_core::repositories::UserRepository;
use sa_core::services::{EmailService, PasswordHasher, ResetTokenService};
use sa_shared::types::ApiResponse;

use super::AppState;
use crate::dto::auth::{AccountSummary, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/login
///
/// The phone is the full international number (`+33612345678`; spaces and
/// dashes are ignored). Unknown phones and wrong passwords get the same 401.
pub async fn login<U, H, T, E>(
    state: web::Data<AppState<U, H, T, E>>,
    request: web::Json<LoginRequest>,
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

    let phone = match state.normalizer.canonicalize(&request.phone) {
        Ok(phone) => phone,
        Err(error) => return handle_domain_error(error.into()),
    };

    match state.credentials.check(&phone, &request.password).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(AccountSummary::from(&user))),
        Err(error) => handle_domain_error(error),
    }
}
