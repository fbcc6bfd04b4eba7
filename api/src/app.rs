//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sa_core::repositories::UserRepository;
use sa_core::services::{EmailService, PasswordHasher, ResetTokenService};
use sa_shared::errors::{error_codes, ErrorResponse};
use sa_shared::types::{HealthResponse, HealthStatus};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    login::login,
    password_reset::{check_link, confirm_reset, request_reset},
    register::register,
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, H, T, E>(
    app_state: web::Data<AppState<U, H, T, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string());
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(response),
        )
        .into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // The last wrap is outermost, so every request gets a span
        .wrap(create_cors())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<U, H, T, E>))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, H, T, E>))
                    .route("/login", web::post().to(login::<U, H, T, E>))
                    .route("/password-reset", web::post().to(request_reset::<U, H, T, E>))
                    .route(
                        "/password-reset/{uid}/{token}",
                        web::get().to(check_link::<U, H, T, E>),
                    )
                    .route(
                        "/password-reset/{uid}/{token}",
                        web::post().to(confirm_reset::<U, H, T, E>),
                    ),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<U, H, T, E>(state: web::Data<AppState<U, H, T, E>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: ResetTokenService + 'static,
    E: EmailService + 'static,
{
    let status = match &state.database {
        None => HealthStatus::Healthy,
        Some(pool) => match pool.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            _ => HealthStatus::Unhealthy,
        },
    };

    let body = HealthResponse::new(status, state.store.clone());
    match status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
        _ => HttpResponse::Ok().json(body),
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
