pub mod error;

pub use error::{field_messages, handle_domain_error, handle_validation_errors};
