//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic insert attempt.
///
/// `insert_if_absent` re-checks both keys under the store's mutual
/// exclusion, so callers can distinguish the three possible outcomes of a
/// race without a separate lookup.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// No record existed for either key; the new record was created.
    Created(Link),
    /// A record for the same long URL already exists. Returned unchanged so
    /// concurrent first-time submissions converge on one code.
    Existing(Link),
    /// The candidate code is taken by a different URL. The caller draws a
    /// fresh code and retries.
    CodeTaken,
}

/// Repository interface for the link store.
///
/// The contract every backend must honor: `insert_if_absent` is atomic with
/// respect to both the code and URL keys, and `increment_clicks` never loses
/// an update under concurrent resolves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Atomically inserts a new link unless either key already exists.
    ///
    /// Checks the URL index first: if `new_link.long_url` is already mapped,
    /// returns [`InsertOutcome::Existing`] with that record. Otherwise, if
    /// `new_link.code` is taken, returns [`InsertOutcome::CodeTaken`].
    /// Otherwise inserts with `clicks = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short code. Pure read, never touches the counter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original long URL (exact string match).
    ///
    /// Used as the dedup fast path before allocating a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter for `code`.
    ///
    /// Returns the post-increment record, or `None` if the code is unknown
    /// (in which case nothing is mutated).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts live records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn count(&self) -> Result<u64, AppError>;
}
