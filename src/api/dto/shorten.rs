//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response for a shortened URL.
///
/// Re-submitting a known URL returns the same payload as the first
/// submission; callers cannot tell a fresh insert from a dedup hit.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}
