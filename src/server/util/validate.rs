//! Input validation helpers shared by the services.
//!
//! Each helper returns `AppError::BadRequest` with a message naming the offending
//! field, and returns the normalized value where normalization applies.

use url::Url;

use crate::server::error::AppError;

/// Largest accepted file attachment, in bytes.
pub const MAX_FILE_SIZE: i64 = 32 * 1024 * 1024;

/// Trims `value` and checks its length in characters lies within `min..=max`.
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len < min {
        return Err(AppError::BadRequest(if min == 1 {
            format!("{} must not be empty", field)
        } else {
            format!("{} must be at least {} characters", field, min)
        }));
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(trimmed.to_string())
}

/// Normalizes an optional free-text field, mapping blank strings to `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(text(field, &v, 1, max)?)),
        _ => Ok(None),
    }
}

/// Validates an optional email address.
pub fn optional_email(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    let Some(email) = optional_text(field, value, 254)? else {
        return Ok(None);
    };

    let valid = email
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        })
        .unwrap_or(false);

    if !valid {
        return Err(AppError::BadRequest(format!(
            "{} must be a valid email address",
            field
        )));
    }

    Ok(Some(email))
}

/// Validates an absolute http(s) URL.
pub fn http_url(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            Ok(trimmed.to_string())
        }
        _ => Err(AppError::BadRequest(format!(
            "{} must be an http or https URL",
            field
        ))),
    }
}

/// Validates an optional http(s) URL, mapping blank strings to `None`.
pub fn optional_http_url(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(http_url(field, &v)?)),
        _ => Ok(None),
    }
}

/// Normalizes and validates a domain name.
///
/// Lowercases, trims, and strips a trailing dot. The result must contain at least two
/// labels, each 1-63 characters of ASCII alphanumerics or hyphens, not starting or
/// ending with a hyphen.
pub fn domain_name(value: &str) -> Result<String, AppError> {
    let name = value.trim().trim_end_matches('.').to_ascii_lowercase();

    let invalid = || AppError::BadRequest(format!("'{}' is not a valid domain name", value.trim()));

    if name.is_empty() || name.len() > 253 {
        return Err(invalid());
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    for label in labels {
        if label.is_empty()
            || label.len() > 63
            || label.starts_with('-')
            || label.ends_with('-')
            || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(invalid());
        }
    }

    Ok(name)
}
