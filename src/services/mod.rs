//! Services layer - asynchronous query boundary
//!
//! This module contains the services consumed by view-layer callers.
//! Services are responsible for:
//! - Turning store queries into owned results
//! - Applying simulated latency to every fetch

pub mod article;
pub mod latency;
pub mod tag;

pub use article::ArticleService;
pub use latency::Latency;
pub use tag::TagService;

use crate::config::Config;
use crate::store::{Store, StoreError};
use std::sync::Arc;

/// Services sharing one store, built from configuration
#[derive(Debug, Clone)]
pub struct Services {
    pub store: Arc<Store>,
    pub tags: TagService,
    pub articles: ArticleService,
}

impl Services {
    /// Build the store and wire both services to it
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = Arc::new(Store::new(&config.store)?);
        let latency = Latency::from_config(&config.latency);
        Ok(Self::new(store, latency, config.pagination.page_size))
    }

    pub fn new(store: Arc<Store>, latency: Latency, default_page_size: i64) -> Self {
        Self {
            tags: TagService::new(store.clone(), latency),
            articles: ArticleService::new(store.clone(), latency, default_page_size),
            store,
        }
    }
}
