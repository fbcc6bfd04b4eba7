//! Mapping from domain errors to HTTP responses

use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse};
use sa_core::errors::{AuthError, DomainError, FieldErrors};
use sa_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

use crate::dto::ErrorResponseExt;

/// Group field errors as `{field: [messages]}`
pub fn field_messages(errors: &FieldErrors) -> HashMap<String, Vec<String>> {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for e in errors {
        fields
            .entry(e.field.clone())
            .or_default()
            .push(e.error.to_string());
    }
    fields
}

/// Group field error codes as `{field: [codes]}`
fn field_codes(errors: &FieldErrors) -> HashMap<String, Vec<&'static str>> {
    let mut codes: HashMap<String, Vec<&'static str>> = HashMap::new();
    for e in errors {
        codes.entry(e.field.clone()).or_default().push(e.error.code());
    }
    codes
}

fn rejected_response(errors: &FieldErrors) -> HttpResponse {
    ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Please correct the errors below",
    )
    .with_field_errors(&field_messages(errors))
    .add_detail("codes", field_codes(errors))
    .to_response(StatusCode::BAD_REQUEST)
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Rejected(errors) => {
            tracing::debug!(count = errors.len(), "Request rejected with field errors");
            rejected_response(&errors)
        }
        DomainError::Auth(AuthError::InvalidCredentials) => ErrorResponse::new(
            error_codes::INVALID_CREDENTIALS,
            AuthError::InvalidCredentials.to_string(),
        )
        .to_response(StatusCode::UNAUTHORIZED),
        DomainError::Auth(AuthError::InvalidResetLink) => ErrorResponse::new(
            error_codes::INVALID_RESET_LINK,
            AuthError::InvalidResetLink.to_string(),
        )
        .to_response(StatusCode::BAD_REQUEST),
        DomainError::Auth(auth_error) => rejected_response(&FieldErrors::from(auth_error)),
        DomainError::ConstraintViolation { constraint } => {
            tracing::warn!(constraint = %constraint, "Duplicate account reported at write time");
            ErrorResponse::new(
                error_codes::DUPLICATE_ACCOUNT,
                "An account with this phone number or email already exists",
            )
            .to_response(StatusCode::CONFLICT)
        }
        DomainError::Delivery { message } => {
            tracing::error!(error = %message, "Email delivery failed");
            ErrorResponse::new(
                error_codes::DELIVERY_ERROR,
                "The email could not be sent. Please try again later",
            )
            .to_response(StatusCode::SERVICE_UNAVAILABLE)
        }
        DomainError::Database { message } => {
            tracing::error!(error = %message, "Database error");
            ErrorResponse::new(error_codes::DATABASE_ERROR, "A database error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::NotFound { resource } => ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("Resource not found: {}", resource),
        )
        .to_response(StatusCode::NOT_FOUND),
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Convert `validator` payload errors into a 400 response
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    ErrorResponse::new(error_codes::BAD_REQUEST, "Invalid request data")
        .with_field_errors(&fields)
        .to_response(StatusCode::BAD_REQUEST)
}
