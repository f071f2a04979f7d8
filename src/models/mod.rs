//! Data models
//!
//! This module contains the data structures shared by the store and services:
//! - Primary records (Tag, Article)
//! - Pagination request/response types

mod article;
mod tag;

pub use article::{Article, ListParams, PagedResult};
pub use tag::{Tag, TagWithCount};
