//! Outgoing email senders
//!
//! Real mail transport is out of scope; these implementations satisfy the
//! `EmailService` port for local runs and tests.

mod log_email;
mod mock_email;

pub use log_email::LogEmailService;
pub use mock_email::{MockEmailService, SentEmail};
