//! tagshelf - builds the store and prints a summary of its contents

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tagshelf::{config::Config, services::Services};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tagshelf...");

    // Load configuration
    let config = Config::load_with_env(Path::new("tagshelf.yml"))?;
    tracing::info!(
        "Configuration loaded: {} articles, page size {}, base latency {}ms",
        config.store.article_count,
        config.pagination.page_size,
        config.latency.base_ms
    );

    let services = Services::from_config(&config)?;

    let (counts, tags) = tokio::join!(
        services.tags.fetch_tag_counts(),
        services.tags.fetch_used_tags()
    );
    println!("{}", serde_json::to_string_pretty(&counts)?);

    let params = services.articles.default_params(1);
    for tag in &tags {
        let page = services
            .articles
            .fetch_articles_page(Some(&tag.path), params.page, params.per_page)
            .await;
        tracing::info!(
            "{}: page 1 of {} ({} total)",
            tag.path,
            page.total_pages(),
            page.total
        );
        println!("{}", serde_json::to_string_pretty(&page)?);
    }

    Ok(())
}
