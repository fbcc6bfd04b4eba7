//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared in `sa_core`:
//!
//! - **Database**: MySQL account repository and connection pool using SQLx
//! - **Email**: outgoing email senders (log-only sender, recording mock)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use sa_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email module - outgoing email senders
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
