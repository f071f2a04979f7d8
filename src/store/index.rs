//! Relationship index
//!
//! Inverted mapping from tag id to the ids of the articles carrying it.
//! Article ids under each tag keep generation order.

use crate::models::Article;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: HashMap<i64, Vec<i64>>,
}

impl TagIndex {
    /// Build the index in a single pass over `articles`.
    ///
    /// Tags that no article references get no entry.
    pub fn build(articles: &[Article]) -> Self {
        let mut entries: HashMap<i64, Vec<i64>> = HashMap::new();
        for article in articles {
            for &tag_id in &article.tag_ids {
                entries.entry(tag_id).or_default().push(article.id);
            }
        }
        Self { entries }
    }

    /// Article ids for a tag, empty when the tag is unused
    pub fn article_ids(&self, tag_id: i64) -> &[i64] {
        self.entries.get(&tag_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, tag_id: i64) -> usize {
        self.article_ids(tag_id).len()
    }

    pub fn contains_tag(&self, tag_id: i64) -> bool {
        self.entries.contains_key(&tag_id)
    }

    /// Number of tags with at least one article
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (tag, article) pairs
    pub fn link_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[i64])> {
        self.entries.iter().map(|(&tag_id, ids)| (tag_id, ids.as_slice()))
    }
}
