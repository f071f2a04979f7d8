//! Tag model
//!
//! This module defines the Tag entity and related types.
//! Tags are created once when the catalog is built and never change afterwards.

use serde::{Deserialize, Serialize};

/// Tag entity representing a topical category.
///
/// The `path` is the URL-safe slug used as the external lookup key.
/// `color`, `description` and `cover` are display fields and carry no
/// meaning for the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique, stable identifier (positive)
    pub id: i64,
    /// Display label
    pub name: String,
    /// URL-friendly slug
    pub path: String,
    /// Accent color
    #[serde(default)]
    pub color: String,
    /// Short summary
    #[serde(default)]
    pub description: String,
    /// Optional cover image URL
    #[serde(default)]
    pub cover: Option<String>,
}

impl Tag {
    /// Create a new Tag with empty display fields
    pub fn new(id: i64, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            color: String::new(),
            description: String::new(),
            cover: None,
        }
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cover image
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

/// Tag with article count for tag cloud functionality
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagWithCount {
    /// The tag itself
    #[serde(flatten)]
    pub tag: Tag,
    /// Number of articles with this tag
    pub article_count: usize,
}

impl TagWithCount {
    /// Create a new TagWithCount
    pub fn new(tag: Tag, article_count: usize) -> Self {
        Self { tag, article_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new(7, "Rust", "rust");

        assert_eq!(tag.id, 7);
        assert_eq!(tag.name, "Rust");
        assert_eq!(tag.path, "rust");
        assert!(tag.color.is_empty());
        assert!(tag.cover.is_none());
    }

    #[test]
    fn test_tag_builders() {
        let tag = Tag::new(1, "Rust", "rust")
            .with_color("#dea584")
            .with_description("Systems programming")
            .with_cover("https://example.com/rust.png");

        assert_eq!(tag.color, "#dea584");
        assert_eq!(tag.description, "Systems programming");
        assert_eq!(tag.cover.as_deref(), Some("https://example.com/rust.png"));
    }

    #[test]
    fn test_tag_with_count_serializes_flat() {
        let twc = TagWithCount::new(Tag::new(1, "Rust", "rust"), 42);
        let json = serde_json::to_value(&twc).unwrap();

        assert_eq!(json["path"], "rust");
        assert_eq!(json["article_count"], 42);
    }

    #[test]
    fn test_tag_deserialize_fills_optional_fields() {
        let tag: Tag = serde_yaml::from_str("id: 3\nname: Go\npath: go\n").unwrap();

        assert_eq!(tag, Tag::new(3, "Go", "go"));
    }
}
