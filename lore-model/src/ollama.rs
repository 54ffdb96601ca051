//! Local inference backend talking to an Ollama server.
//!
//! Two clients share the same server: [`OllamaClient`] for text completion
//! via `/api/generate` and [`OllamaEmbedding`] for vectors via
//! `/api/embeddings`. A cold local model can take tens of seconds to answer,
//! so the configured timeout must cover the worst case.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use lore_core::{CompletionProvider, EmbeddingProvider, LoreError, ProviderVariant, Result};

/// Default local server address.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default completion model expected to be available on the local server.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2:latest";

/// Default embedding model and its output dimensionality.
pub const DEFAULT_EMBED_MODEL: &str = "all-minilm";
pub const DEFAULT_EMBED_DIMENSIONS: usize = 384;

const PROVIDER_NAME: &str = "ollama";

fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoreError::Config(format!("failed to build http client: {e}")))
}

fn map_request_error(e: reqwest::Error, timeout: Duration) -> LoreError {
    if e.is_timeout() {
        LoreError::ProviderTimeout { variant: PROVIDER_NAME.into(), seconds: timeout.as_secs() }
    } else {
        LoreError::ProviderUnavailable {
            variant: PROVIDER_NAME.into(),
            message: format!("request failed: {e}"),
        }
    }
}

// ── /api/generate wire types ───────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    repeat_penalty: f32,
    num_predict: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { temperature: 0.7, top_p: 0.9, repeat_penalty: 1.2, num_predict: 300 }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// A [`CompletionProvider`] backed by a local Ollama server.
///
/// The Local variant of the provider pair: no credential, a well-known
/// local address, and a small model that is assumed to already be pulled.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a client for the given server address and model.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { client: build_client(timeout)?, base_url, model: model.into(), timeout })
    }
}

#[async_trait]
impl CompletionProvider for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "ollama generate");

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions::default(),
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER_NAME, error = %e, "completion request failed");
                map_request_error(e, self.timeout)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!(provider = PROVIDER_NAME, %status, "completion API error");
            return Err(LoreError::ProviderUnavailable {
                variant: PROVIDER_NAME.into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        // A reachable server returning an undecodable body is treated as
        // unavailable; there is no fallback to the other variant.
        let generated: GenerateResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER_NAME, error = %e, "failed to parse completion response");
            LoreError::ProviderUnavailable {
                variant: PROVIDER_NAME.into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(generated.response)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn variant(&self) -> ProviderVariant {
        ProviderVariant::Local
    }
}

// ── /api/embeddings wire types ─────────────────────────────────────

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    embedding: Vec<f32>,
}

/// An [`EmbeddingProvider`] backed by the local server's embeddings endpoint.
pub struct OllamaEmbedding {
    client: reqwest::Client,
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
}

impl OllamaEmbedding {
    /// Create a provider for the given server address, model, and expected
    /// output dimensionality.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            model: model.into(),
            dimensions,
            timeout,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(model = %self.model, text_len = text.len(), "ollama embed");

        let body = EmbeddingsRequest { model: &self.model, prompt: text };

        let response = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER_NAME, error = %e, "embedding request failed");
                if e.is_timeout() {
                    LoreError::Embedding {
                        provider: PROVIDER_NAME.into(),
                        message: format!("timed out after {}s", self.timeout.as_secs()),
                    }
                } else {
                    LoreError::Embedding {
                        provider: PROVIDER_NAME.into(),
                        message: format!("request failed: {e}"),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!(provider = PROVIDER_NAME, %status, "embedding API error");
            return Err(LoreError::Embedding {
                provider: PROVIDER_NAME.into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let decoded: EmbeddingsResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER_NAME, error = %e, "failed to parse embedding response");
            LoreError::Embedding {
                provider: PROVIDER_NAME.into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        if decoded.embedding.len() != self.dimensions {
            return Err(LoreError::Embedding {
                provider: PROVIDER_NAME.into(),
                message: format!(
                    "dimension mismatch: got {}, expected {}",
                    decoded.embedding.len(),
                    self.dimensions
                ),
            });
        }

        Ok(decoded.embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
