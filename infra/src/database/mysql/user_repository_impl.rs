//! MySQL implementation of the UserRepository trait.
//!
//! The `users` table carries unique keys `uq_users_phone` and `uq_users_email`;
//! a duplicate insert (MySQL error 1062) is reported as
//! `DomainError::ConstraintViolation` naming the offending column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sa_core::domain::entities::user::User;
use sa_core::errors::DomainError;
use sa_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, phone, email, first_name, last_name, country, password_hash, \
                            is_active, is_staff, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            phone: row.try_get("phone").map_err(column_error("phone"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            first_name: row.try_get("first_name").map_err(column_error("first_name"))?,
            last_name: row.try_get("last_name").map_err(column_error("last_name"))?,
            country: row.try_get("country").map_err(column_error("country"))?,
            password_hash: row.try_get("password_hash").map_err(column_error("password_hash"))?,
            is_active: row.try_get("is_active").map_err(column_error("is_active"))?,
            is_staff: row.try_get("is_staff").map_err(column_error("is_staff"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user by {}: {}", column, e),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

/// Translate an insert failure, recognizing unique-key violations
pub(crate) fn map_insert_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::ConstraintViolation {
                constraint: constraint_column(db_err.message()).to_string(),
            };
        }
    }
    DomainError::Database {
        message: format!("Failed to create user: {}", err),
    }
}

/// Column guarded by the unique key named in a MySQL duplicate-entry message
pub(crate) fn constraint_column(message: &str) -> &'static str {
    if message.contains("uq_users_email") {
        "email"
    } else if message.contains("uq_users_phone") {
        "phone"
    } else {
        "unknown"
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(user.id.to_string())
            .bind(&user.phone)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.country)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_staff)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(user)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.find_one("phone", phone).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", &id.to_string()).await
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update password: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        Ok(())
    }
}
