//! Store - immutable tag/article state and the query engine
//!
//! The store is built once at startup:
//! 1. the tag catalog (built-in or from configuration)
//! 2. the generated article set
//! 3. the relationship index derived from the articles
//!
//! After construction nothing is mutated, so a `Store` can be shared behind
//! an `Arc` by any number of concurrent readers without locking.
//!
//! Every query is a total function: unknown tag paths and out-of-range pages
//! produce empty results rather than errors.

pub mod catalog;
pub mod generator;
pub mod index;

pub use catalog::{TagCatalog, DEFAULT_TAGS};
pub use index::TagIndex;

use crate::config::StoreConfig;
use crate::models::{Article, ListParams, PagedResult, Tag, TagWithCount};
use std::collections::BTreeMap;

/// Path that selects every article
pub const ALL_PATH: &str = "all";

/// Error types for store construction
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Tag catalog is empty")]
    EmptyCatalog,

    #[error("Invalid tag id {0}: ids must be positive")]
    InvalidTagId(i64),

    #[error("Duplicate tag id: {0}")]
    DuplicateTagId(i64),

    #[error("Duplicate tag path: {0}")]
    DuplicateTagPath(String),

    #[error("Tag path '{0}' is reserved")]
    ReservedTagPath(String),

    #[error("Article count must be positive")]
    EmptyArticleSet,
}

/// Tag catalog, article set and relationship index
#[derive(Debug, Clone)]
pub struct Store {
    catalog: TagCatalog,
    articles: Vec<Article>,
    index: TagIndex,
}

impl Store {
    /// Build the store from configuration.
    ///
    /// Uses `config.tags` as the catalog when present, the built-in catalog
    /// otherwise.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let catalog = match &config.tags {
            Some(tags) => TagCatalog::new(tags.clone())?,
            None => TagCatalog::builtin(),
        };
        Self::with_catalog(config, catalog)
    }

    /// Build the store from configuration and an explicit catalog
    pub fn with_catalog(config: &StoreConfig, catalog: TagCatalog) -> Result<Self, StoreError> {
        if config.article_count == 0 {
            return Err(StoreError::EmptyArticleSet);
        }

        let articles = generator::generate_articles(config, &catalog);
        let index = TagIndex::build(&articles);

        tracing::info!(
            "Store built: {} tags, {} articles, {} used tags, {} links",
            catalog.len(),
            articles.len(),
            index.len(),
            index.link_count()
        );

        Ok(Self {
            catalog,
            articles,
            index,
        })
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    /// All articles in generation order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article_by_id(&self, id: i64) -> Option<&Article> {
        // ids are assigned sequentially from 1
        let pos = usize::try_from(id.checked_sub(1)?).ok()?;
        self.articles.get(pos)
    }

    pub fn tag_by_path(&self, path: &str) -> Option<&Tag> {
        self.catalog.tag_by_path(path)
    }

    /// Catalog tags that at least one article carries, in catalog order
    pub fn used_tags(&self) -> Vec<&Tag> {
        self.catalog
            .tags()
            .iter()
            .filter(|tag| self.index.contains_tag(tag.id))
            .collect()
    }

    /// Expand an article's tag ids into tag records
    pub fn article_tags(&self, article: &Article) -> Vec<&Tag> {
        article
            .tag_ids
            .iter()
            .filter_map(|&id| self.catalog.tag_by_id(id))
            .collect()
    }

    /// Articles for a tag path.
    ///
    /// `None` or `"all"` selects every article; an unknown path yields an
    /// empty list.
    pub fn articles_by_tag_path(&self, path: Option<&str>) -> Vec<&Article> {
        match path {
            None | Some(ALL_PATH) => self.articles.iter().collect(),
            Some(path) => match self.catalog.tag_id_by_path(path) {
                Some(tag_id) => self
                    .index
                    .article_ids(tag_id)
                    .iter()
                    .filter_map(|&id| self.article_by_id(id))
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// Article count per used tag path, plus `"all"` for the whole set
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .used_tags()
            .into_iter()
            .map(|tag| (tag.path.clone(), self.index.count(tag.id)))
            .collect();
        counts.insert(ALL_PATH.to_string(), self.articles.len());
        counts
    }

    /// Article count for a single tag path, 0 when unknown or unused
    pub fn tag_count_by_path(&self, path: &str) -> usize {
        self.catalog
            .tag_id_by_path(path)
            .map(|tag_id| self.index.count(tag_id))
            .unwrap_or(0)
    }

    /// Used tags with their counts, in catalog order
    pub fn tag_cloud(&self) -> Vec<TagWithCount> {
        self.used_tags()
            .into_iter()
            .map(|tag| TagWithCount::new(tag.clone(), self.index.count(tag.id)))
            .collect()
    }

    /// One page of the articles for a tag path.
    ///
    /// `total` always counts the full filtered list; pages past the end and
    /// non-positive page sizes return no items.
    pub fn articles_page(&self, path: Option<&str>, params: &ListParams) -> PagedResult<&Article> {
        let filtered = self.articles_by_tag_path(path);
        let items = params.apply(&filtered).to_vec();
        PagedResult::new(items, filtered.len(), params)
    }
}
