//! Offline batch ingestion: crawl configured listing pages, extract article
//! text, embed it, and insert one row per new article. Failures are scoped
//! to the article or source they occur in; the run always continues.

mod config;
mod crawl;
mod extract;

use std::time::Duration;

use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use lore_core::{EmbeddingProvider, NewDocument};
use lore_model::ollama::OllamaEmbedding;
use lore_rag::{DocumentStore, MySqlDocumentStore};

use crate::config::IngestConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = IngestConfig::from_env()?;

    let store = MySqlDocumentStore::connect(&config.db, config.embed_dimensions).await?;
    store.ensure_schema().await?;

    let embedder = OllamaEmbedding::new(
        &config.ollama_url,
        &config.embed_model,
        config.embed_dimensions,
        config.request_timeout,
    )?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent("Mozilla/5.0 (LoreIngest/0.1)")
        .build()?;

    let mut total = 0usize;
    for source in &config.sources {
        match crawl_source(&client, &store, &embedder, &config, source).await {
            Ok(count) => {
                total += count;
                info!(source = %source, count, "source completed");
            }
            Err(e) => {
                warn!(source = %source, error = %e, "source failed; continuing with the next one")
            }
        }
    }

    info!(total, "ingestion completed");
    Ok(())
}

/// Crawl one listing page and its pagination chain, ingesting every new
/// article found. Returns the number of articles inserted.
async fn crawl_source(
    client: &reqwest::Client,
    store: &MySqlDocumentStore,
    embedder: &OllamaEmbedding,
    config: &IngestConfig,
    source: &str,
) -> anyhow::Result<usize> {
    let mut inserted = 0usize;
    let mut page_url = Some(source.to_string());

    while let Some(current) = page_url.take() {
        debug!(page = %current, "fetching listing page");
        let base = Url::parse(&current)?;
        let body = client.get(current).send().await?.text().await?;

        // Parse in a scope of its own: the DOM is not Send and must not be
        // held across an await.
        let (links, next) = {
            let document = Html::parse_document(&body);
            (
                crawl::collect_article_links(&document, &base),
                crawl::next_page_url(&document, &base),
            )
        };

        if links.is_empty() && next.is_none() {
            break;
        }

        for link in links {
            if store.contains_url(&link).await? {
                continue;
            }
            match ingest_article(client, store, embedder, config, &link).await {
                Ok(true) => inserted += 1,
                Ok(false) => {}
                Err(e) => warn!(url = %link, error = %e, "article failed; skipping"),
            }
            tokio::time::sleep(config.article_delay).await;
        }

        page_url = next;
        tokio::time::sleep(config.page_delay).await;
    }

    Ok(inserted)
}

/// Fetch, extract, embed, and insert a single article. Returns `false`
/// when the page was fetched but its body was too short to store.
async fn ingest_article(
    client: &reqwest::Client,
    store: &MySqlDocumentStore,
    embedder: &OllamaEmbedding,
    config: &IngestConfig,
    url: &str,
) -> anyhow::Result<bool> {
    let body = client.get(url).send().await?.text().await?;

    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    let (title, content) = {
        let document = Html::parse_document(&body);
        (extract::extract_title(&document, slug), extract::extract_content(&document))
    };

    if content.len() < config.min_content_len {
        debug!(url, content_len = content.len(), "content too short; not storing");
        return Ok(false);
    }

    let embedding = embedder.embed(&content).await?;

    let id = store
        .insert(&NewDocument {
            title: title.clone(),
            url: Some(url.to_string()),
            author: None,
            published_date: None,
            categories: None,
            content,
            embedding,
        })
        .await?;

    info!(document.id = id, title = %title, "inserted article");
    Ok(true)
}
