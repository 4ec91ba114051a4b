//! Field validation predicates shared by the request DTOs.
//!
//! The predicates are pure classifiers; the `validator`-crate adapter
//! functions below them are what DTO derives reference. Every adapter
//! failure surfaces to the client as the same 400 response, so the
//! error codes attached here never reach the wire.

use uuid::Uuid;
use validator::ValidationError;

/// A present-but-blank string counts as invalid.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Parses a canonical hyphenated UUID. Other textual forms that the
/// `uuid` crate would accept (simple, braced, URN) are rejected.
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    if value.len() == 36 {
        Uuid::try_parse(value).ok()
    } else {
        None
    }
}

pub fn is_valid_uuid(value: &str) -> bool {
    parse_uuid(value).is_some()
}

/// Password policy: 8 to 16 characters with at least one lowercase
/// letter, one uppercase letter and one digit. Other characters are
/// allowed but do not count toward the three required classes.
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    (8..=16).contains(&len)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Non-blank string starting with `https`. The prefix check is a plain
/// string match, not a URL parse.
pub fn is_https_url(value: &str) -> bool {
    is_valid_string(value) && value.starts_with("https")
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new("not_blank"))
    }
}

pub fn uuid_string(value: &str) -> Result<(), ValidationError> {
    if is_valid_uuid(value) {
        Ok(())
    } else {
        Err(ValidationError::new("uuid"))
    }
}

pub fn https_url(value: &str) -> Result<(), ValidationError> {
    if is_https_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new("https_url"))
    }
}

/// Profile image rule: the field may be absent or blank, but a non-blank
/// value must start with `https`.
pub fn optional_https_url(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) && !value.starts_with("https") {
        Err(ValidationError::new("https_url"))
    } else {
        Ok(())
    }
}
