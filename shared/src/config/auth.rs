//! Authentication configuration: password hashing and reset tokens

use serde::{Deserialize, Serialize};

const DEFAULT_RESET_SECRET: &str = "your-reset-secret-change-in-production";

/// Password hashing and strength policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor (4..=31)
    pub hash_cost: u32,

    /// Minimum accepted password length (never below 8)
    pub min_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            hash_cost: 12,
            min_length: 8,
        }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let hash_cost = std::env::var("PASSWORD_HASH_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(defaults.hash_cost);
        let min_length = std::env::var("PASSWORD_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|len| *len >= defaults.min_length)
            .unwrap_or(defaults.min_length);

        Self {
            hash_cost,
            min_length,
        }
    }
}

/// Password-reset token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResetTokenConfig {
    /// HMAC secret used to sign reset tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub ttl_seconds: i64,

    /// Issuer claim written into every token
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for ResetTokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_RESET_SECRET),
            ttl_seconds: 259_200, // 3 days
            issuer: default_issuer(),
        }
    }
}

impl ResetTokenConfig {
    /// Create a new reset token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in hours
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.ttl_seconds = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_RESET_SECRET
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("RESET_TOKEN_SECRET").unwrap_or(defaults.secret);
        let ttl_seconds = std::env::var("RESET_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.ttl_seconds);

        Self {
            secret,
            ttl_seconds,
            issuer: defaults.issuer,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Password configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Reset token configuration
    #[serde(default)]
    pub reset_token: ResetTokenConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            password: PasswordConfig::from_env(),
            reset_token: ResetTokenConfig::from_env(),
        }
    }
}

fn default_issuer() -> String {
    String::from("sahelis-auth")
}
