//! Input validation helpers shared by the API handlers and the pipeline.
//!
//! Each helper returns [`CoreError::Validation`] with a message naming the
//! offending field, so handlers can propagate with `?`.

use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

/// Reject empty or whitespace-only values.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject values that are not a syntactically valid email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Reject values that are not an absolute URL.
pub fn validate_url(field: &str, url: &str) -> Result<(), CoreError> {
    if !url.validate_url() {
        return Err(CoreError::Validation(format!("{field} must be a valid URL")));
    }
    Ok(())
}

/// Treat empty optional strings as absent.
///
/// Forms submit `""` for untouched optional inputs; storing those would
/// overwrite real values on update.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
