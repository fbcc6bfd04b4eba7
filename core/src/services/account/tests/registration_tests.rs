//! Unit tests for the registration pipeline

use std::sync::Arc;

use crate::domain::value_objects::RegistrationRequest;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::password::PasswordHasher;

use super::mocks::*;

fn rejected(result: Result<crate::domain::entities::user::User, DomainError>) -> crate::errors::FieldErrors {
    match result {
        Err(DomainError::Rejected(errors)) => errors,
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_french_number() {
    let repo = Arc::new(MockUserRepository::new());
    let service = registration_service(repo.clone());

    let user = service.register(french_request()).await.unwrap();

    assert_eq!(user.phone, "+33612345678");
    assert_eq!(user.country, "FR");
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert_ne!(user.password_hash, "abcdefg1");
    assert!(FakePasswordHasher.verify("abcdefg1", &user.password_hash));
    assert!(repo.find_by_phone("+33612345678").await.unwrap().is_some());
}

#[tokio::test]
async fn test_second_registration_same_phone_is_duplicate() {
    let repo = Arc::new(MockUserRepository::new());
    let service = registration_service(repo.clone());
    service.register(french_request()).await.unwrap();

    let second = RegistrationRequest {
        email: Some("other@example.com".to_string()),
        ..french_request()
    };
    let errors = rejected(service.register(second).await);

    assert!(errors.contains(&AuthError::DuplicatePhone));
    assert!(!errors.contains(&AuthError::DuplicateEmail));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_trunk_prefix_collides_with_canonical_number() {
    let repo = Arc::new(MockUserRepository::new());
    let service = registration_service(repo);
    service.register(french_request()).await.unwrap();

    let second = RegistrationRequest {
        phone: "0612345678".to_string(),
        email: None,
        ..french_request()
    };
    let errors = rejected(service.register(second).await);
    assert!(errors.contains(&AuthError::DuplicatePhone));
}

#[tokio::test]
async fn test_second_registration_same_email_is_duplicate() {
    let repo = Arc::new(MockUserRepository::new());
    let service = registration_service(repo);
    service.register(french_request()).await.unwrap();

    let second = RegistrationRequest {
        country: "US".to_string(),
        phone: "2015550123".to_string(),
        email: Some("awa@EXAMPLE.com".to_string()),
        ..french_request()
    };
    let errors = rejected(service.register(second).await);

    assert!(errors.contains(&AuthError::DuplicateEmail));
    assert!(!errors.contains(&AuthError::DuplicatePhone));
}

#[tokio::test]
async fn test_email_domain_is_normalized() {
    let service = registration_service(Arc::new(MockUserRepository::new()));
    let request = RegistrationRequest {
        email: Some(" Awa@Example.COM ".to_string()),
        ..french_request()
    };

    let user = service.register(request).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("Awa@example.com"));
}

#[tokio::test]
async fn test_blank_email_is_stored_as_none() {
    let service = registration_service(Arc::new(MockUserRepository::new()));
    let request = RegistrationRequest {
        email: Some("   ".to_string()),
        ..french_request()
    };

    let user = service.register(request).await.unwrap();
    assert!(user.email.is_none());
}

#[tokio::test]
async fn test_invalid_phone_and_password_reported_together() {
    let service = registration_service(Arc::new(MockUserRepository::new()));
    let request = RegistrationRequest {
        phone: "6123456".to_string(),
        password: "abcdefgh".to_string(),
        password_confirmation: "abcdefgi".to_string(),
        ..french_request()
    };

    let errors = rejected(service.register(request).await);
    assert!(errors.has_code("INVALID_PHONE_NUMBER"));
    assert!(errors.has_code("WEAK_PASSWORD"));
    assert!(errors.contains(&AuthError::PasswordMismatch));
}

#[tokio::test]
async fn test_unknown_country_is_reported_on_country_field() {
    let service = registration_service(Arc::new(MockUserRepository::new()));
    let request = RegistrationRequest {
        country: "ZZ".to_string(),
        ..french_request()
    };

    let errors = rejected(service.register(request).await);
    assert_eq!(errors.for_field("country").count(), 1);
    assert!(errors.has_code("INVALID_COUNTRY"));
}

#[tokio::test]
async fn test_register_staff_sets_flag() {
    let service = registration_service(Arc::new(MockUserRepository::new()));
    let user = service.register_staff(french_request()).await.unwrap();
    assert!(user.is_staff);
}

#[tokio::test]
async fn test_uniqueness_race_surfaces_constraint_violation() {
    let service = registration_service(Arc::new(RacingUserRepository));

    let result = service.register(french_request()).await;
    assert!(matches!(result, Err(DomainError::ConstraintViolation { .. })));
}

#[tokio::test]
async fn test_malformed_email_is_rejected_and_not_stored() {
    let repo = Arc::new(MockUserRepository::new());
    let service = registration_service(repo.clone());
    let request = RegistrationRequest {
        email: Some("x@@y.com".to_string()),
        ..french_request()
    };

    let errors = rejected(service.register(request).await);
    assert_eq!(errors.for_field("email").count(), 1);
    assert_eq!(repo.count().await, 0);
}
