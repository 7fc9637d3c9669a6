//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    /// Public base URL prepended to short codes in API responses.
    pub base_url: String,
}

impl AppState {
    /// Creates application state around a link service.
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
