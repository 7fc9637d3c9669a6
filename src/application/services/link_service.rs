//! Link creation, resolution, and stats service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_url;

/// Cap on code allocation rounds before reporting the store as saturated.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and inspecting short links.
///
/// Owns the store's behavioral guarantees: idempotent re-submission of the
/// same URL, collision-free code allocation, and the resolve/peek split
/// (only resolve counts a visit).
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a link service generating codes of the default length.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_code_length(link_repository, DEFAULT_CODE_LENGTH)
    }

    /// Creates a link service with an explicit code length.
    pub fn with_code_length(link_repository: Arc<L>, code_length: usize) -> Self {
        Self {
            link_repository,
            code_length,
        }
    }

    /// Returns the short link for `long_url`, creating it on first sight.
    ///
    /// # Deduplication
    ///
    /// URLs are compared byte for byte, no normalization. Repeated
    /// submissions of the same string always return the same code, and
    /// concurrent first-time submissions converge on a single record via
    /// the store's atomic insert.
    ///
    /// # Code Generation
    ///
    /// Draws random codes from the 62-symbol alphanumeric alphabet and
    /// retries on collision, up to [`MAX_CODE_ATTEMPTS`] rounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is not a valid
    /// absolute HTTP(S) URL.
    /// Returns [`AppError::AllocationExhausted`] if every attempted code
    /// was taken.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        validate_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        // Fast path; the insert below re-checks under the store's lock, so
        // a miss here never produces a duplicate.
        if let Some(existing_link) = self.link_repository.find_by_long_url(&long_url).await? {
            return Ok(existing_link);
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(self.code_length),
                long_url: long_url.clone(),
            };

            match self.link_repository.insert_if_absent(new_link).await? {
                InsertOutcome::Created(link) | InsertOutcome::Existing(link) => return Ok(link),
                InsertOutcome::CodeTaken => continue,
            }
        }

        Err(AppError::allocation_exhausted(
            "Failed to allocate a unique code",
            json!({ "attempts": MAX_CODE_ATTEMPTS, "code_length": self.code_length }),
        ))
    }

    /// Resolves a short code for a redirect, counting the visit.
    ///
    /// Returns the post-increment record; the increment is atomic in the
    /// store, so concurrent resolves never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code. Nothing is
    /// mutated in that case.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Looks up a short code without counting a visit.
    ///
    /// The stats view uses this; resolving and viewing stats must not be
    /// conflated in the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn peek(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Number of live links in the store.
    pub async fn count_links(&self) -> Result<u64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
