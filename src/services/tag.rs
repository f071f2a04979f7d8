//! Tag service
//!
//! Latency-wrapped tag lookups for view-layer callers:
//! - Used tags and tag-by-path lookup
//! - Per-path article counts
//! - Tag cloud (used tags with counts)

use crate::models::{Tag, TagWithCount};
use crate::services::latency::Latency;
use crate::store::Store;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tag service over the shared store
#[derive(Debug, Clone)]
pub struct TagService {
    store: Arc<Store>,
    latency: Latency,
}

impl TagService {
    /// Create a new tag service
    ///
    /// # Arguments
    /// * `store` - Shared immutable store
    /// * `latency` - Delay applied to every fetch
    pub fn new(store: Arc<Store>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Tags that at least one article carries, in catalog order
    pub async fn fetch_used_tags(&self) -> Vec<Tag> {
        let tags: Vec<Tag> = self.store.used_tags().into_iter().cloned().collect();
        tracing::debug!("fetch_used_tags: {} tags", tags.len());
        self.latency.deliver(tags).await
    }

    /// Get tag by path
    ///
    /// # Returns
    /// The tag if found, None otherwise
    pub async fn fetch_tag_by_path(&self, path: &str) -> Option<Tag> {
        let tag = self.store.tag_by_path(path).cloned();
        tracing::debug!("fetch_tag_by_path({}): found={}", path, tag.is_some());
        self.latency.deliver(tag).await
    }

    /// Article count per used tag path, with an `"all"` total
    pub async fn fetch_tag_counts(&self) -> BTreeMap<String, usize> {
        self.latency.wrap(|| self.store.tag_counts()).await
    }

    /// Article count for one path; 0 for unknown paths
    pub async fn fetch_tag_count_by_path(&self, path: &str) -> usize {
        self.latency.wrap(|| self.store.tag_count_by_path(path)).await
    }

    /// Get tag cloud (used tags with their article counts)
    pub async fn fetch_tag_cloud(&self) -> Vec<TagWithCount> {
        self.latency.wrap(|| self.store.tag_cloud()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn setup_test_service() -> TagService {
        let store = Store::new(&StoreConfig::default()).expect("Failed to build store");
        TagService::new(Arc::new(store), Latency::none())
    }

    #[tokio::test]
    async fn test_fetch_used_tags() {
        let service = setup_test_service();

        let tags = service.fetch_used_tags().await;
        let paths: Vec<_> = tags.iter().map(|t| t.path.as_str()).collect();

        assert_eq!(
            paths,
            vec!["javascript", "indie", "reading", "tech", "vuejs", "nodejs"]
        );
    }

    #[tokio::test]
    async fn test_fetch_tag_by_path_found() {
        let service = setup_test_service();

        let tag = service
            .fetch_tag_by_path("reading")
            .await
            .expect("Tag not found");

        assert_eq!(tag.id, 3);
    }

    #[tokio::test]
    async fn test_fetch_tag_by_path_not_found() {
        let service = setup_test_service();

        assert!(service.fetch_tag_by_path("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_tag_counts_match_store() {
        let service = setup_test_service();

        let counts = service.fetch_tag_counts().await;

        assert_eq!(counts, service.store.tag_counts());
        assert_eq!(counts["all"], 40);
    }

    #[tokio::test]
    async fn test_fetch_tag_count_by_path() {
        let service = setup_test_service();

        assert_eq!(service.fetch_tag_count_by_path("nonexistent").await, 0);
        assert_eq!(
            service.fetch_tag_count_by_path("tech").await,
            service.store.tag_count_by_path("tech")
        );
    }

    #[tokio::test]
    async fn test_fetch_tag_cloud() {
        let service = setup_test_service();

        let cloud = service.fetch_tag_cloud().await;

        assert_eq!(cloud.len(), 6);
        assert!(cloud.iter().all(|entry| entry.article_count > 0));
    }
}
