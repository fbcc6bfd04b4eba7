//! Tests for the password reset service

#[cfg(test)]
mod service_tests;
