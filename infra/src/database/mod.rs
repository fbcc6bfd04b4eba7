//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Account repository implementation
//! - Schema bootstrap

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
