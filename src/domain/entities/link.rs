//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its visit counter.
///
/// Maps a short code to the original long URL. `code` is the primary key;
/// `long_url` is deduplicated by exact string equality, so the first-seen
/// spelling of a URL is canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>, clicks: u64) -> Self {
        Self {
            code,
            long_url,
            created_at,
            clicks,
        }
    }

    /// Returns true if the link has never been resolved.
    pub fn is_unvisited(&self) -> bool {
        self.clicks == 0
    }
}

/// Input data for creating a new link.
///
/// The store stamps `created_at` and zeroes `clicks` at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
