//! Long URL validation.
//!
//! Accepts or rejects, never rewrites: the stored URL is the caller's input
//! byte for byte, and dedup compares exact strings. Rewriting here would
//! silently merge URLs the caller considers distinct.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Checks that `input` is a syntactically plausible absolute URL.
///
/// # Rules
///
/// 1. Non-empty
/// 2. Parses as an absolute URL
/// 3. Scheme is `http` or `https` (rejects `javascript:`, `data:`, `file:`, ...)
/// 4. Has a host
///
/// # Errors
///
/// Returns the first violated rule as a [`UrlValidationError`].
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
