//! Unit tests for MySQL error mapping

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use sa_core::errors::DomainError;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::database::mysql::user_repository_impl::{constraint_column, map_insert_error};

#[derive(Debug)]
struct TestDbError {
    message: &'static str,
    kind: ErrorKind,
}

impl fmt::Display for TestDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl StdError for TestDbError {}

impl DatabaseError for TestDbError {
    fn message(&self) -> &str {
        self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23000"))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.kind {
            ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
            _ => ErrorKind::Other,
        }
    }
}

fn db_error(message: &'static str, kind: ErrorKind) -> sqlx::Error {
    sqlx::Error::Database(Box::new(TestDbError { message, kind }))
}

#[test]
fn test_constraint_column_from_mysql_message() {
    assert_eq!(
        constraint_column("Duplicate entry 'a@example.com' for key 'users.uq_users_email'"),
        "email"
    );
    assert_eq!(
        constraint_column("Duplicate entry '+33612345678' for key 'uq_users_phone'"),
        "phone"
    );
    assert_eq!(constraint_column("Duplicate entry 'x' for key 'PRIMARY'"), "unknown");
}

#[test]
fn test_unique_violation_maps_to_constraint_violation() {
    let err = db_error(
        "Duplicate entry '+33612345678' for key 'users.uq_users_phone'",
        ErrorKind::UniqueViolation,
    );
    match map_insert_error(err) {
        DomainError::ConstraintViolation { constraint } => assert_eq!(constraint, "phone"),
        other => panic!("expected constraint violation, got {:?}", other),
    }
}

#[test]
fn test_other_errors_map_to_database_error() {
    let err = db_error("Data too long for column 'first_name'", ErrorKind::Other);
    assert!(matches!(map_insert_error(err), DomainError::Database { .. }));

    assert!(matches!(
        map_insert_error(sqlx::Error::PoolTimedOut),
        DomainError::Database { .. }
    ));
}
