//! MySQL round trips for the account repository
//!
//! Run with `DATABASE_URL` pointing at a disposable database:
//! `cargo test -p sa_infra --test mysql_user_repository -- --ignored`

use sa_core::domain::entities::user::User;
use sa_core::domain::value_objects::{CanonicalPhone, NewAccount};
use sa_core::errors::DomainError;
use sa_core::repositories::UserRepository;
use sa_infra::database::{DatabasePool, MySqlUserRepository};
use sa_shared::config::DatabaseConfig;
use uuid::Uuid;

async fn repository() -> MySqlUserRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for MySQL tests");
    let pool = DatabasePool::new(&DatabaseConfig::new(url)).await.unwrap();
    pool.run_migrations().await.unwrap();
    MySqlUserRepository::new(pool.get_pool().clone())
}

fn unique_user() -> User {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    let digits: String = suffix
        .chars()
        .map(|c| char::from(b'0' + (c as u8 % 10)))
        .collect();
    User::new(
        NewAccount {
            phone: CanonicalPhone::from_canonical(format!("+336{}", digits)),
            email: Some(format!("{}@example.com", suffix)),
            first_name: "Awa".to_string(),
            last_name: "Diallo".to_string(),
            country: "FR".to_string(),
            is_staff: false,
        },
        "$2b$04$placeholderplaceholderplaceholderplaceholderpl".to_string(),
    )
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_create_and_find() {
    let repo = repository().await;
    let user = repo.create(unique_user()).await.unwrap();

    let by_phone = repo.find_by_phone(&user.phone).await.unwrap().unwrap();
    assert_eq!(by_phone.id, user.id);

    let by_email = repo
        .find_by_email(user.email.as_deref().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.country, "FR");
    assert!(by_id.is_active);
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_duplicate_phone_is_constraint_violation() {
    let repo = repository().await;
    let first = repo.create(unique_user()).await.unwrap();

    let mut second = unique_user();
    second.phone = first.phone.clone();

    match repo.create(second).await {
        Err(DomainError::ConstraintViolation { constraint }) => assert_eq!(constraint, "phone"),
        other => panic!("expected constraint violation, got {:?}", other),
    }
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_update_password_hash() {
    let repo = repository().await;
    let user = repo.create(unique_user()).await.unwrap();

    repo.update_password_hash(user.id, "new-hash").await.unwrap();
    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    let missing = repo.update_password_hash(Uuid::new_v4(), "x").await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}
