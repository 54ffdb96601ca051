//! Startup configuration, loaded from the environment exactly once.
//!
//! Every knob the service honors is enumerated here; nothing else in the
//! codebase reads environment variables. The remote-credential check that
//! drives provider selection lives in
//! [`ProviderConfig`](lore_model::ProviderConfig), built from these values.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use lore_core::{LoreError, Result};
use lore_model::ProviderConfig;
use lore_model::groq::DEFAULT_GROQ_MODEL;
use lore_model::ollama::{
    DEFAULT_EMBED_DIMENSIONS, DEFAULT_EMBED_MODEL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
};
use lore_rag::{DbConfig, RagConfig};

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,
    pub port: u16,
    /// Relational store connection parameters.
    pub db: DbConfig,
    /// Completion provider selection inputs.
    pub provider: ProviderConfig,
    /// Search and prompt tunables.
    pub rag: RagConfig,
    /// Local embedding model name.
    pub embed_model: String,
    /// Embedding dimensionality D; constant across the store.
    pub embed_dimensions: usize,
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

impl Config {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LoreError::Config`] for unparseable numeric values or
    /// out-of-range search tunables.
    pub fn from_env() -> Result<Self> {
        let provider = ProviderConfig {
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            groq_model: env_or("LORE_GROQ_MODEL", DEFAULT_GROQ_MODEL),
            ollama_url: env_or("LORE_OLLAMA_URL", DEFAULT_OLLAMA_URL),
            ollama_model: env_or("LORE_OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
            request_timeout: Duration::from_secs(parse_env("LORE_REQUEST_TIMEOUT_SECS", 60)?),
        };

        let rag = RagConfig::builder()
            .top_k(parse_env("LORE_TOP_K", 2)?)
            .similarity_threshold(parse_env("LORE_SIMILARITY_THRESHOLD", 0.30)?)
            .excerpt_budget(parse_env("LORE_EXCERPT_BUDGET", 1500)?)
            .build()?;

        let db = DbConfig {
            host: env_or("LORE_DB_HOST", "localhost"),
            user: env_or("LORE_DB_USER", "root"),
            password: env_or("LORE_DB_PASSWORD", ""),
            database: env_or("LORE_DB_NAME", "case_studies_db"),
        };

        Ok(Self {
            host: env_or("LORE_HOST", "127.0.0.1"),
            port: parse_env("LORE_PORT", 8000)?,
            db,
            provider,
            rag,
            embed_model: env_or("LORE_EMBED_MODEL", DEFAULT_EMBED_MODEL),
            embed_dimensions: parse_env("LORE_EMBED_DIMENSIONS", DEFAULT_EMBED_DIMENSIONS)?,
        })
    }
}
