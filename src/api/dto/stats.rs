//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a specific short link.
///
/// `clicks` counts redirects served; viewing this response does not
/// increment it.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}
