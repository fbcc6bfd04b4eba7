//! Unit tests for the password reset flow

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

use super::mocks::*;

#[tokio::test]
async fn test_request_reset_sends_link() {
    let (repo, user) = seeded_repo().await;
    let email = Arc::new(RecordingEmailService::default());
    let service = reset_service(repo, email.clone());

    service
        .request_reset("mariam@EXAMPLE.com", "https://sahelisbeauty.com/")
        .await
        .unwrap();

    let sent = email.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "mariam@example.com");
    assert_eq!(sent[0].subject, "Password reset");
    assert!(sent[0].body.contains("Hello Mariam"));
    let expected_prefix = format!("https://sahelisbeauty.com/password-reset-confirm/{}/", user.id);
    assert!(sent[0].body.contains(&expected_prefix));
}

#[tokio::test]
async fn test_request_reset_unknown_email() {
    let (repo, _) = seeded_repo().await;
    let email = Arc::new(RecordingEmailService::default());
    let service = reset_service(repo, email.clone());

    let result = service.request_reset("nobody@example.com", "http://localhost").await;
    match result {
        Err(DomainError::Rejected(errors)) => {
            assert_eq!(errors.for_field("email").next(), Some(&AuthError::AccountNotFound));
        }
        other => panic!("expected AccountNotFound, got {:?}", other),
    }
    assert!(email.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_reset_delivery_failure() {
    let (repo, _) = seeded_repo().await;
    let service = reset_service(repo, Arc::new(FailingEmailService));

    let result = service.request_reset("mariam@example.com", "http://localhost").await;
    assert!(matches!(result, Err(DomainError::Delivery { .. })));
}

#[tokio::test]
async fn test_full_reset_flow_and_single_use() {
    let (repo, user) = seeded_repo().await;
    let email = Arc::new(RecordingEmailService::default());
    let service = reset_service(repo.clone(), email.clone());

    service.request_reset("mariam@example.com", "http://localhost").await.unwrap();
    let body = email.sent.lock().unwrap()[0].body.clone();
    let (uid, token) = link_parts(&body);
    assert_eq!(uid, user.id.to_string());

    assert_eq!(service.check_link(&uid, &token).await.unwrap().id, user.id);

    service
        .confirm_reset(&uid, &token, "newpass12", "newpass12")
        .await
        .unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(CountingPasswordHasher::default().verify("newpass12", &stored.password_hash));

    // The link dies with the old password hash
    let reused = service.confirm_reset(&uid, &token, "another12", "another12").await;
    assert!(matches!(reused, Err(DomainError::Auth(AuthError::InvalidResetLink))));
}

#[tokio::test]
async fn test_check_link_rejects_bad_ids_and_tokens() {
    let (repo, user) = seeded_repo().await;
    let service = reset_service(repo, Arc::new(RecordingEmailService::default()));

    let bad_uid = service.check_link("not-a-uuid", "token").await;
    assert!(matches!(bad_uid, Err(DomainError::Auth(AuthError::InvalidResetLink))));

    let unknown = service.check_link(&Uuid::new_v4().to_string(), "token").await;
    assert!(matches!(unknown, Err(DomainError::Auth(AuthError::InvalidResetLink))));

    let bad_token = service.check_link(&user.id.to_string(), "token").await;
    assert!(matches!(bad_token, Err(DomainError::Auth(AuthError::InvalidResetLink))));
}

#[tokio::test]
async fn test_confirm_reset_validates_new_password() {
    let (repo, user) = seeded_repo().await;
    let email = Arc::new(RecordingEmailService::default());
    let service = reset_service(repo.clone(), email.clone());

    service.request_reset("mariam@example.com", "http://localhost").await.unwrap();
    let body = email.sent.lock().unwrap()[0].body.clone();
    let (uid, token) = link_parts(&body);

    let result = service.confirm_reset(&uid, &token, "short", "shorter").await;
    match result {
        Err(DomainError::Rejected(errors)) => {
            assert!(errors.for_field("new_password2").any(|e| e == &AuthError::PasswordMismatch));
            assert!(errors.for_field("new_password1").count() >= 1);
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    // Nothing changed, so the link still works
    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "0$oldpass1");
    assert!(service.check_link(&uid, &token).await.is_ok());
}
