//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: the [`auth::CurrentUser`] extractor, which validates the
//!   bearer token and loads the matching user row
//! - [`role`]: the coach-only gate layered over the admin course routes
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`auth::CurrentUser`] verifies the JWT and fetches the user from the
//!    database; a token for a deleted account is rejected
//! 3. Route layers such as [`role::require_coach`] run additional checks
//! 4. The handler executes with the loaded user

pub mod auth;
pub mod role;
