//! Configuration modules, loaded from environment variables.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: JWT signing secret and token lifetime
//!
//! Each config struct exposes a `from_env()` constructor with sensible
//! development defaults; only `DATABASE_URL` is mandatory.

pub mod cors;
pub mod database;
pub mod jwt;
