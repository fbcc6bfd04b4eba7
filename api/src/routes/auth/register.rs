use actix_web::{web, HttpResponse};
use validator::Validate;

use sa_core::repositories::UserRepository;
use sa_core::services::{EmailService, PasswordHasher, ResetTokenService};
use sa_shared::types::ApiResponse;
use sa_shared::utils::phone::mask_phone;

use super::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Awa",
///     "last_name": "Diallo",
///     "country": "FR",
///     "phone": "612345678",
///     "email": "awa@example.com",
///     "password": "abcdefg1",
///     "password_confirmation": "abcdefg1"
/// }
/// ```
///
/// # Responses
/// - 201 with `{id, phone}`, the phone in canonical form
/// - 400 with every field error under `details.fields`
/// - 409 when a concurrent registration took the phone or email first
pub async fn register<U, H, T, E>(
    state: web::Data<AppState<U, H, T, E>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    tracing::info!(
        phone = %mask_phone(&request.phone),
        country = %request.country,
        "Processing registration"
    );

    match state.registration.register(request.into()).await {
        Ok(user) => HttpResponse::Created().json(
            ApiResponse::success(RegisterResponse::from(&user)).with_message("Account created"),
        ),
        Err(error) => handle_domain_error(error),
    }
}
