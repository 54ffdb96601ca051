//! Ingest-run configuration, loaded from the environment once.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use lore_core::{LoreError, Result};
use lore_model::ollama::{DEFAULT_EMBED_DIMENSIONS, DEFAULT_EMBED_MODEL, DEFAULT_OLLAMA_URL};
use lore_rag::DbConfig;

/// Configuration for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Listing pages to crawl, in order.
    pub sources: Vec<String>,
    /// Articles shorter than this (in characters) are not stored.
    pub min_content_len: usize,
    /// Delay between listing pages, for respectful crawling.
    pub page_delay: Duration,
    /// Delay between article fetches.
    pub article_delay: Duration,
    pub db: DbConfig,
    pub ollama_url: String,
    pub embed_model: String,
    pub embed_dimensions: usize,
    /// Timeout for embedding requests.
    pub request_timeout: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| LoreError::Config(format!("invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

impl IngestConfig {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LoreError::Config`] when `LORE_SOURCES` is missing or
    /// empty, or a numeric value does not parse.
    pub fn from_env() -> Result<Self> {
        let sources: Vec<String> = std::env::var("LORE_SOURCES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if sources.is_empty() {
            return Err(LoreError::Config(
                "LORE_SOURCES must list at least one listing URL".to_string(),
            ));
        }

        let db = DbConfig {
            host: env_or("LORE_DB_HOST", "localhost"),
            user: env_or("LORE_DB_USER", "root"),
            password: env_or("LORE_DB_PASSWORD", ""),
            database: env_or("LORE_DB_NAME", "case_studies_db"),
        };

        Ok(Self {
            sources,
            min_content_len: parse_env("LORE_MIN_CONTENT_LEN", 300)?,
            page_delay: Duration::from_secs(parse_env("LORE_PAGE_DELAY_SECS", 1)?),
            article_delay: Duration::from_secs(parse_env("LORE_ARTICLE_DELAY_SECS", 2)?),
            db,
            ollama_url: env_or("LORE_OLLAMA_URL", DEFAULT_OLLAMA_URL),
            embed_model: env_or("LORE_EMBED_MODEL", DEFAULT_EMBED_MODEL),
            embed_dimensions: parse_env("LORE_EMBED_DIMENSIONS", DEFAULT_EMBED_DIMENSIONS)?,
            request_timeout: Duration::from_secs(parse_env("LORE_REQUEST_TIMEOUT_SECS", 60)?),
        })
    }
}
