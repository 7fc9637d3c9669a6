//! In-memory implementation of the link repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Record collection guarded by a single lock.
///
/// Both indexes must move together: `insert_if_absent` has to observe the
/// URL index and the code index in one critical section, otherwise two
/// concurrent first-time submissions of the same URL could both insert.
#[derive(Default)]
struct Records {
    by_code: HashMap<String, Link>,
    code_by_url: HashMap<String, String>,
}

/// Thread-safe in-memory link store.
///
/// A `RwLock` over two hash indexes keeps every mutation (insert, click
/// increment) atomic while lookups stay O(1). Critical sections are plain
/// map operations with no `.await` inside, so the std lock is sufficient.
#[derive(Default)]
pub struct MemoryLinkRepository {
    records: RwLock<Records>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut records = self.records.write().expect("link store lock poisoned");

        if let Some(existing) = records
            .code_by_url
            .get(&new_link.long_url)
            .and_then(|code| records.by_code.get(code))
        {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        if records.by_code.contains_key(&new_link.code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let link = Link::new(new_link.code.clone(), new_link.long_url.clone(), Utc::now(), 0);
        records
            .code_by_url
            .insert(new_link.long_url, new_link.code.clone());
        records.by_code.insert(new_link.code, link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let records = self.records.read().expect("link store lock poisoned");
        Ok(records.by_code.get(code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let records = self.records.read().expect("link store lock poisoned");
        Ok(records
            .code_by_url
            .get(long_url)
            .and_then(|code| records.by_code.get(code))
            .cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut records = self.records.write().expect("link store lock poisoned");
        Ok(records.by_code.get_mut(code).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn count(&self) -> Result<u64, AppError> {
        let records = self.records.read().expect("link store lock poisoned");
        Ok(records.by_code.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_creates_record() {
        let repo = MemoryLinkRepository::new();

        let outcome = repo
            .insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        match outcome {
            InsertOutcome::Created(link) => {
                assert_eq!(link.code, "Ab3dE9");
                assert_eq!(link.long_url, "https://example.com/a");
                assert_eq!(link.clicks, 0);
            }
            other => panic!("expected Created, got {:?}", other),
        }

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_same_url_returns_existing() {
        let repo = MemoryLinkRepository::new();

        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_absent(new_link("zzZZ99", "https://example.com/a"))
            .await
            .unwrap();

        match outcome {
            InsertOutcome::Existing(link) => assert_eq!(link.code, "Ab3dE9"),
            other => panic!("expected Existing, got {:?}", other),
        }

        // The second code must not have been claimed.
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find_by_code("zzZZ99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_taken_code_reports_collision() {
        let repo = MemoryLinkRepository::new();

        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_absent(new_link("Ab3dE9", "https://example.com/b"))
            .await
            .unwrap();

        assert!(matches!(outcome, InsertOutcome::CodeTaken));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_code() {
        let repo = MemoryLinkRepository::new();
        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        let found = repo.find_by_code("Ab3dE9").await.unwrap();
        assert_eq!(found.unwrap().long_url, "https://example.com/a");

        assert!(repo.find_by_code("zzzzzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_long_url_is_exact_match() {
        let repo = MemoryLinkRepository::new();
        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        assert!(
            repo.find_by_long_url("https://example.com/a")
                .await
                .unwrap()
                .is_some()
        );
        // No normalization: a different spelling is a different URL.
        assert!(
            repo.find_by_long_url("https://EXAMPLE.com/a")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_increment_clicks_returns_post_increment() {
        let repo = MemoryLinkRepository::new();
        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        let link = repo.increment_clicks("Ab3dE9").await.unwrap().unwrap();
        assert_eq!(link.clicks, 1);

        let link = repo.increment_clicks("Ab3dE9").await.unwrap().unwrap();
        assert_eq!(link.clicks, 2);
    }

    #[tokio::test]
    async fn test_increment_unknown_code_mutates_nothing() {
        let repo = MemoryLinkRepository::new();
        repo.insert_if_absent(new_link("Ab3dE9", "https://example.com/a"))
            .await
            .unwrap();

        assert!(repo.increment_clicks("zzzzzz").await.unwrap().is_none());

        let link = repo.find_by_code("Ab3dE9").await.unwrap().unwrap();
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_url_create_one_record() {
        use std::sync::Arc;

        let repo = Arc::new(MemoryLinkRepository::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert_if_absent(new_link(&format!("code{:02}", i), "https://example.com"))
                    .await
                    .unwrap()
            }));
        }

        let mut created = 0;
        for handle in handles {
            if let InsertOutcome::Created(_) = handle.await.unwrap() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
