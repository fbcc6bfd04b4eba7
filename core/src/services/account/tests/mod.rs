//! Tests for account services

#[cfg(test)]
mod registration_tests;
