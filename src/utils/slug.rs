//! Location slug validation.

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Lowercase alphanumerics and hyphens only.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

pub const MIN_SLUG_LENGTH: usize = 2;
pub const MAX_SLUG_LENGTH: usize = 50;

/// Validates a user-supplied location slug.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the slug is too short, too long,
/// or contains characters outside `[a-z0-9-]`.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < MIN_SLUG_LENGTH || slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Slug length must be between 2 and 50 characters",
            json!({ "slug": slug, "length": slug.len() }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Slug may only contain lowercase letters, digits and hyphens",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
