//! Password reset by email over HTTP

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use sa_api::create_app;
use sa_infra::email::MockEmailService;

use common::{link_parts, memory_state, registration_body};

#[actix_web::test]
async fn test_full_reset_flow() {
    let email = MockEmailService::new();
    let app = test::init_service(create_app(memory_state(email.clone()))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(registration_body())
        .to_request();
    assert_eq!(test::call_service(&app, register).await.status(), StatusCode::CREATED);

    // Request a link
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "awa@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = email.last().await.expect("reset email sent");
    assert_eq!(sent.to, "awa@example.com");
    assert_eq!(sent.subject, "Password reset");
    assert!(sent.body.contains("http://testserver/password-reset-confirm/"));
    let (uid, token) = link_parts(&sent.body);
    let link = format!("/api/v1/auth/password-reset/{}/{}", uid, token);

    // The link checks out
    let req = test::TestRequest::get().uri(&link).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["valid"], true);

    // Mismatched and weak new passwords are both reported
    let req = test::TestRequest::post()
        .uri(&link)
        .set_json(json!({ "new_password1": "short", "new_password2": "other" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["codes"]["new_password2"][0], "PASSWORD_MISMATCH");
    assert_eq!(body["details"]["codes"]["new_password1"][0], "WEAK_PASSWORD");

    // Set the new password
    let req = test::TestRequest::post()
        .uri(&link)
        .set_json(json!({ "new_password1": "newpass42", "new_password2": "newpass42" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The link is spent
    let req = test::TestRequest::get().uri(&link).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_RESET_LINK");

    // Old password no longer works, the new one does
    let old = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "phone": "+33612345678", "password": "abcdefg1" }))
        .to_request();
    assert_eq!(test::call_service(&app, old).await.status(), StatusCode::UNAUTHORIZED);

    let new = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "phone": "+33612345678", "password": "newpass42" }))
        .to_request();
    assert_eq!(test::call_service(&app, new).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reset_unknown_email() {
    let email = MockEmailService::new();
    let app = test::init_service(create_app(memory_state(email.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "nobody@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["codes"]["email"][0], "ACCOUNT_NOT_FOUND");
    assert!(email.sent().await.is_empty());
}

#[actix_web::test]
async fn test_reset_invalid_email_shape() {
    let app = test::init_service(create_app(memory_state(MockEmailService::new()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert!(body["details"]["fields"]["email"].is_array());
}

#[actix_web::test]
async fn test_reset_delivery_failure() {
    let app = test::init_service(create_app(memory_state(MockEmailService::failing(
        "connection refused",
    ))))
    .await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(registration_body())
        .to_request();
    assert_eq!(test::call_service(&app, register).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "awa@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "DELIVERY_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("connection refused"));
}

#[actix_web::test]
async fn test_reset_link_with_garbage_parts() {
    let app = test::init_service(create_app(memory_state(MockEmailService::new()))).await;

    for uri in [
        "/api/v1/auth/password-reset/not-a-uuid/token",
        "/api/v1/auth/password-reset/6f1c2d3e-4b5a-4c6d-8e7f-0a1b2c3d4e5f/token",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_RESET_LINK");
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset/not-a-uuid/token")
        .set_json(json!({ "new_password1": "newpass42", "new_password2": "newpass42" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
