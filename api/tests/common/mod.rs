//! Shared setup for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::{json, Value};

use sa_api::AppState;
use sa_core::repositories::{MockUserRepository, UserRepository};
use sa_core::services::{BcryptPasswordHasher, JwtResetTokenService, PasswordPolicy};
use sa_infra::email::MockEmailService;
use sa_shared::config::ResetTokenConfig;

pub const BASE_URL: &str = "http://testserver";

pub type TestState<U> = AppState<U, BcryptPasswordHasher, JwtResetTokenService, MockEmailService>;

/// App state over `repository`, with a cheap bcrypt cost and the given mail sender
pub fn state_with<U: UserRepository>(
    repository: Arc<U>,
    email: MockEmailService,
) -> web::Data<TestState<U>> {
    web::Data::new(AppState::new(
        repository,
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::new(JwtResetTokenService::new(&ResetTokenConfig::new(
            "integration-test-secret",
        ))),
        Arc::new(email),
        PasswordPolicy::default(),
        BASE_URL,
        "memory",
    ))
}

pub fn memory_state(email: MockEmailService) -> web::Data<TestState<MockUserRepository>> {
    state_with(Arc::new(MockUserRepository::new()), email)
}

/// A valid French sign-up form
pub fn registration_body() -> Value {
    json!({
        "first_name": "Awa",
        "last_name": "Diallo",
        "country": "FR",
        "phone": "612345678",
        "email": "awa@example.com",
        "password": "abcdefg1",
        "password_confirmation": "abcdefg1"
    })
}

/// `(uid, token)` from the reset link in an email body
pub fn link_parts(body: &str) -> (String, String) {
    let marker = "password-reset-confirm/";
    let start = body.find(marker).expect("body contains a reset link") + marker.len();
    let mut parts = body[start..].split('/');
    let uid = parts.next().expect("link has an account id").to_string();
    let token = parts.next().expect("link has a token").to_string();
    (uid, token)
}
