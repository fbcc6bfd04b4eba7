//! Recording email sender for tests

use async_trait::async_trait;
use sa_core::services::reset::EmailService;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A message captured by [`MockEmailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every message; can be switched to fail like a broken transport
#[derive(Debug, Clone, Default)]
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    fail_with: Option<String>,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every `send` fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    /// Messages sent so far
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().await.clone()
    }

    /// Most recent message, if any
    pub async fn last(&self) -> Option<SentEmail> {
        self.sent.lock().await.last().cloned()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.sent.lock().await.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
