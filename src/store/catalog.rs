//! Tag catalog
//!
//! The fixed reference set of tags plus O(1) lookups by id and by path.

use super::{StoreError, ALL_PATH};
use crate::models::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in tag set used when the configuration does not supply one.
pub static DEFAULT_TAGS: Lazy<Vec<Tag>> = Lazy::new(|| {
    vec![
        Tag::new(1, "JavaScript", "javascript")
            .with_color("#28c840")
            .with_description("The language of the web, from browsers to servers")
            .with_cover("https://picsum.photos/seed/tag-javascript/800/400"),
        Tag::new(2, "Indie Dev", "indie")
            .with_color("#f59e0b")
            .with_description("Building and shipping products on your own")
            .with_cover("https://picsum.photos/seed/tag-indie/800/400"),
        Tag::new(3, "Reading", "reading")
            .with_color("#3b82f6")
            .with_description("Notes and reviews from books")
            .with_cover("https://picsum.photos/seed/tag-reading/800/400"),
        Tag::new(4, "Tech", "tech")
            .with_color("#ef4444")
            .with_description("General engineering topics")
            .with_cover("https://picsum.photos/seed/tag-tech/800/400"),
        Tag::new(5, "VueJs", "vuejs")
            .with_color("#ff5f57")
            .with_description("Components, reactivity and the Vue ecosystem")
            .with_cover("https://picsum.photos/seed/tag-vuejs/800/400"),
        Tag::new(6, "Node.js", "nodejs")
            .with_color("#febc2e")
            .with_description("Server-side JavaScript")
            .with_cover("https://picsum.photos/seed/tag-nodejs/800/400"),
    ]
});

/// Ordered, immutable set of tags.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    tags: Vec<Tag>,
    by_id: HashMap<i64, usize>,
    by_path: HashMap<String, usize>,
}

impl TagCatalog {
    /// Build a catalog from an ordered tag list.
    ///
    /// # Errors
    /// - `EmptyCatalog` if `tags` is empty
    /// - `InvalidTagId` if an id is not positive
    /// - `ReservedTagPath` if a path is `"all"`
    /// - `DuplicateTagId` / `DuplicateTagPath` if a key repeats
    pub fn new(tags: Vec<Tag>) -> Result<Self, StoreError> {
        if tags.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }

        let mut by_id = HashMap::with_capacity(tags.len());
        let mut by_path = HashMap::with_capacity(tags.len());

        for (pos, tag) in tags.iter().enumerate() {
            if tag.id <= 0 {
                return Err(StoreError::InvalidTagId(tag.id));
            }
            if tag.path == ALL_PATH {
                return Err(StoreError::ReservedTagPath(tag.path.clone()));
            }
            if by_id.insert(tag.id, pos).is_some() {
                return Err(StoreError::DuplicateTagId(tag.id));
            }
            if by_path.insert(tag.path.clone(), pos).is_some() {
                return Err(StoreError::DuplicateTagPath(tag.path.clone()));
            }
        }

        Ok(Self {
            tags,
            by_id,
            by_path,
        })
    }

    /// The built-in six-tag catalog
    pub fn builtin() -> Self {
        Self::new(DEFAULT_TAGS.clone()).expect("built-in tag catalog is valid")
    }

    /// All tags in catalog order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag at a 1-based catalog position
    pub fn at_position(&self, position: usize) -> Option<&Tag> {
        position.checked_sub(1).and_then(|i| self.tags.get(i))
    }

    pub fn tag_by_id(&self, id: i64) -> Option<&Tag> {
        self.by_id.get(&id).map(|&pos| &self.tags[pos])
    }

    pub fn tag_by_path(&self, path: &str) -> Option<&Tag> {
        self.by_path.get(path).map(|&pos| &self.tags[pos])
    }

    pub fn tag_id_by_path(&self, path: &str) -> Option<i64> {
        self.tag_by_path(path).map(|tag| tag.id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = TagCatalog::builtin();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.tags()[0].path, "javascript");
        assert_eq!(catalog.tags()[5].path, "nodejs");
        assert!(catalog.tags().iter().all(|t| t.cover.is_some()));
    }

    #[test]
    fn test_lookup_by_id_and_path() {
        let catalog = TagCatalog::builtin();

        assert_eq!(catalog.tag_by_id(3).map(|t| t.path.as_str()), Some("reading"));
        assert_eq!(catalog.tag_id_by_path("vuejs"), Some(5));
        assert_eq!(catalog.tag_by_path("tech").map(|t| t.id), Some(4));
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = TagCatalog::builtin();

        assert!(catalog.tag_by_id(0).is_none());
        assert!(catalog.tag_by_id(99).is_none());
        assert!(catalog.tag_id_by_path("nonexistent").is_none());
        assert!(catalog.tag_id_by_path("all").is_none());
    }

    #[test]
    fn test_at_position() {
        let catalog = TagCatalog::builtin();

        assert!(catalog.at_position(0).is_none());
        assert_eq!(catalog.at_position(1).map(|t| t.id), Some(1));
        assert_eq!(catalog.at_position(6).map(|t| t.id), Some(6));
        assert!(catalog.at_position(7).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(TagCatalog::new(vec![]), Err(StoreError::EmptyCatalog)));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result = TagCatalog::new(vec![Tag::new(0, "Zero", "zero")]);
        assert!(matches!(result, Err(StoreError::InvalidTagId(0))));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let dup_id = TagCatalog::new(vec![Tag::new(1, "A", "a"), Tag::new(1, "B", "b")]);
        assert!(matches!(dup_id, Err(StoreError::DuplicateTagId(1))));

        let dup_path = TagCatalog::new(vec![Tag::new(1, "A", "a"), Tag::new(2, "B", "a")]);
        assert!(matches!(dup_path, Err(StoreError::DuplicateTagPath(p)) if p == "a"));
    }

    #[test]
    fn test_reserved_path_rejected() {
        let result = TagCatalog::new(vec![
            Tag::new(1, "A", "a"),
            Tag::new(2, "Everything", "all"),
            Tag::new(3, "C", "c"),
        ]);
        assert!(matches!(result, Err(StoreError::ReservedTagPath(p)) if p == "all"));
    }
}
