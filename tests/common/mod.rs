#![allow(dead_code)]

use std::sync::Arc;

use linksnip::application::services::LinkService;
use linksnip::domain::entities::NewLink;
use linksnip::domain::repositories::LinkRepository;
use linksnip::infrastructure::persistence::MemoryLinkRepository;
use linksnip::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds application state around a fresh in-memory store.
///
/// The repository handle is returned alongside so tests can seed records
/// with known codes and inspect the store behind the handlers' backs.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repository.clone()));

    let state = AppState::new(link_service, TEST_BASE_URL.to_string());

    (state, link_repository)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) {
    repo.insert_if_absent(NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
    })
    .await
    .unwrap();
}

pub async fn get_clicks(repo: &MemoryLinkRepository, code: &str) -> u64 {
    repo.find_by_code(code).await.unwrap().unwrap().clicks
}
