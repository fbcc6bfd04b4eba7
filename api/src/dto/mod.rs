pub mod auth;
pub mod error;

pub use auth::*;
pub use error::ErrorResponseExt;
