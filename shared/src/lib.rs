//! Shared utilities and common types for the Sahelis account services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Utility functions (phone masking, email normalization, field validation)
//! - API response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, EmailConfig, Environment, LoggingConfig,
    PasswordConfig, ResetTokenConfig, ServerConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::{phone, validation};
