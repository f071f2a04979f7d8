//! Article service
//!
//! Latency-wrapped article queries for view-layer callers:
//! - Listing by tag path
//! - Paginated listing by tag path
//! - Single article lookup and tag expansion

use crate::models::{Article, ListParams, PagedResult, Tag};
use crate::services::latency::Latency;
use crate::store::Store;
use std::sync::Arc;

/// Article service over the shared store
#[derive(Debug, Clone)]
pub struct ArticleService {
    store: Arc<Store>,
    latency: Latency,
    default_page_size: i64,
}

impl ArticleService {
    /// Create a new article service
    ///
    /// # Arguments
    /// * `store` - Shared immutable store
    /// * `latency` - Delay applied to every fetch
    /// * `default_page_size` - Page size for `default_params`
    pub fn new(store: Arc<Store>, latency: Latency, default_page_size: i64) -> Self {
        Self {
            store,
            latency,
            default_page_size,
        }
    }

    /// Pagination parameters for `page` with the configured page size
    pub fn default_params(&self, page: i64) -> ListParams {
        ListParams::new(page, self.default_page_size)
    }

    /// Articles for a tag path in generation order
    ///
    /// `None` or `"all"` returns every article; unknown paths return an
    /// empty list.
    pub async fn fetch_articles_by_tag_path(&self, path: Option<&str>) -> Vec<Article> {
        let articles: Vec<Article> = self
            .store
            .articles_by_tag_path(path)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            "fetch_articles_by_tag_path({:?}): {} articles",
            path,
            articles.len()
        );
        self.latency.deliver(articles).await
    }

    /// One page of articles for a tag path
    ///
    /// # Arguments
    /// * `path` - Tag path, `None` or `"all"` for every article
    /// * `page` - Page number (1-indexed, lower values clamp to the first page)
    /// * `page_size` - Items per page (non-positive values give empty pages)
    pub async fn fetch_articles_page(
        &self,
        path: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> PagedResult<Article> {
        let params = ListParams::new(page, page_size);
        let result = self.store.articles_page(path, &params).map(Article::clone);
        tracing::debug!(
            "fetch_articles_page({:?}, {}, {}): {}/{} items",
            path,
            page,
            page_size,
            result.len(),
            result.total
        );
        self.latency.deliver(result).await
    }

    /// Get article by ID
    pub async fn fetch_article(&self, id: i64) -> Option<Article> {
        self.latency
            .wrap(|| self.store.article_by_id(id).cloned())
            .await
    }

    /// Tags of an article in stored order; empty for unknown ids
    pub async fn fetch_article_tags(&self, id: i64) -> Vec<Tag> {
        self.latency
            .wrap(|| match self.store.article_by_id(id) {
                Some(article) => self
                    .store
                    .article_tags(article)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => Vec::new(),
            })
            .await
    }
}
