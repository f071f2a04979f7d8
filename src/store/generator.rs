//! Article generator
//!
//! Produces the article set deterministically from the configured count and
//! the tag catalog. Every field is a pure function of the article id, so two
//! runs with the same inputs yield identical output.

use super::catalog::TagCatalog;
use crate::config::StoreConfig;
use crate::models::Article;

/// Generate `config.article_count` articles with ids `1..=N`.
pub fn generate_articles(config: &StoreConfig, catalog: &TagCatalog) -> Vec<Article> {
    (1..=config.article_count as i64)
        .map(|id| {
            let article = Article {
                id,
                title: format!("Article {} · Practice and Takeaways", id),
                cover: format!("https://picsum.photos/seed/article-{}/1200/700", id),
                author_name: config.author_name.clone(),
                author_avatar: config.author_avatar.clone(),
                date: article_date(config.year, id),
                tag_ids: pick_tag_ids(id, catalog),
                views: article_views(id),
            };
            debug_assert!(!article.tag_ids.is_empty());
            debug_assert!(article.tag_ids.iter().all(|&t| catalog.contains(t)));
            article
        })
        .collect()
}

/// `YYYY-MM-DD` where month and day derive from the 0-based index.
///
/// Months cycle 1..=9 and days 1..=28.
pub fn article_date(year: i32, id: i64) -> String {
    let i = id - 1;
    let month = i.rem_euclid(9) + 1;
    let day = (i * 3).rem_euclid(28) + 1;
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Always within `[50, 999]`.
pub fn article_views(id: i64) -> i64 {
    50 + (id * 13).rem_euclid(950)
}

/// Tag ids for an article, deduplicated in first-seen order.
///
/// Selection works on 1-based catalog positions: a base position
/// `id mod M` (0 maps to `M`), `((base + 1) mod M) + 1` for even ids and
/// `((base + 3) mod M) + 1` for ids divisible by 3.
pub fn pick_tag_ids(id: i64, catalog: &TagCatalog) -> Vec<i64> {
    let m = catalog.len() as i64;
    let base = match id.rem_euclid(m) {
        0 => m,
        r => r,
    };

    let mut positions = vec![base];
    if id % 2 == 0 {
        positions.push((base + 1) % m + 1);
    }
    if id % 3 == 0 {
        positions.push((base + 3) % m + 1);
    }

    let mut ids = Vec::with_capacity(positions.len());
    for tag in positions
        .into_iter()
        .filter_map(|p| catalog.at_position(p as usize))
    {
        if !ids.contains(&tag.id) {
            ids.push(tag.id);
        }
    }
    ids
}
