//! tagshelf - an in-memory tag/article relationship index
//!
//! This library builds a fixed tag catalog and a generated article set,
//! derives an inverted index from tag to articles, and serves filtered,
//! counted and paginated queries over it. The `services` layer exposes the
//! same queries asynchronously behind a simulated network delay.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
