//! Utility modules shared across the application.
//!
//! - [`errors`]: Application error type and response rendering
//! - [`jwt`]: JWT token creation and verification
//! - [`pagination`]: Pagination query parsing
//! - [`password`]: Password hashing and verification
//! - [`response`]: Success envelope helper
//! - [`validation`]: Field validation predicates and validator adapters

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
pub mod response;
pub mod validation;
