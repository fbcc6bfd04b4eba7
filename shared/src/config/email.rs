//! Outgoing email configuration

use serde::{Deserialize, Serialize};

/// Email sender configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Address placed in the `From` header of outgoing mail
    pub from_address: String,

    /// Public base URL used to build links embedded in emails
    pub public_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_address: String::from("noreply@sahelisbeauty.com"),
            public_base_url: String::from("http://localhost:8080"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_base_url),
        }
    }
}
