//! Email sender that writes messages to the tracing log

use async_trait::async_trait;
use sa_core::services::reset::EmailService;
use sa_shared::config::EmailConfig;
use tracing::{debug, info};

/// Logs outgoing emails instead of delivering them
///
/// The body carries a reset token and is only logged when `reveal_body` is set,
/// which the binary does in development.
#[derive(Debug, Clone)]
pub struct LogEmailService {
    from_address: String,
    reveal_body: bool,
}

impl LogEmailService {
    pub fn new(config: &EmailConfig, reveal_body: bool) -> Self {
        Self {
            from_address: config.from_address.clone(),
            reveal_body,
        }
    }
}

#[async_trait]
impl EmailService for LogEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        info!(
            from = %self.from_address,
            to = %to,
            subject = %subject,
            body_len = body.len(),
            "Email send stub"
        );
        if self.reveal_body {
            debug!(to = %to, body = %body, "Email body");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_email_always_succeeds() {
        let sender = LogEmailService::new(&EmailConfig::default(), false);
        assert!(sender.send("a@example.com", "Password reset", "body").await.is_ok());
    }
}
