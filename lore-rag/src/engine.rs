//! Query orchestrator.
//!
//! The [`AnswerEngine`] coordinates the request path: embed the question,
//! scan the store, filter by the similarity threshold, assemble a bounded
//! excerpt prompt, and call the selected completion provider. Construct one
//! via [`AnswerEngine::builder()`].

use std::sync::Arc;

use tracing::{error, info};

use lore_core::{AnswerResult, CompletionProvider, EmbeddingProvider, LoreError, Result};

use crate::config::RagConfig;
use crate::prompt::build_prompt;
use crate::search::{ScoredDocument, search};
use crate::store::DocumentStore;

/// Answer text returned when no stored document clears the similarity
/// threshold. A successful outcome, not an error.
pub const NOT_FOUND_ANSWER: &str = "Not found in database.";

/// The question-answering orchestrator.
pub struct AnswerEngine {
    config: RagConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    completion_provider: Arc<dyn CompletionProvider>,
    store: Arc<dyn DocumentStore>,
}

impl AnswerEngine {
    /// Create a new [`AnswerEngineBuilder`].
    pub fn builder() -> AnswerEngineBuilder {
        AnswerEngineBuilder::default()
    }

    /// Return a reference to the engine configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Answer a question from the stored articles.
    ///
    /// Identical questions over an identical store always yield identical
    /// `references`; the answer text may vary with a non-deterministic
    /// completion backend.
    ///
    /// # Errors
    ///
    /// - [`LoreError::Validation`] for an empty or whitespace-only
    ///   question, before any provider call is made.
    /// - [`LoreError::Store`] if the document store is unreachable.
    /// - [`LoreError::Embedding`], [`LoreError::ProviderUnavailable`], or
    ///   [`LoreError::ProviderTimeout`] from the providers, passed through
    ///   unchanged.
    pub async fn answer(&self, question: &str) -> Result<AnswerResult> {
        // 1. Reject empty questions before any provider work happens
        let question = question.trim();
        if question.is_empty() {
            return Err(LoreError::Validation("question must not be empty".to_string()));
        }

        // 2. Embed the question
        let query_embedding = self.embedding_provider.embed(question).await.map_err(|e| {
            error!(error = %e, "question embedding failed");
            e
        })?;

        // 3. Full scan over the stored documents
        let documents = self.store.fetch_all().await.map_err(|e| {
            error!(error = %e, "document fetch failed");
            e
        })?;
        let results = search(&documents, &query_embedding, self.config.top_k);

        // 4. Keep only results clearing the threshold; nothing left means
        //    the corpus has no relevant article
        let threshold = self.config.similarity_threshold;
        let selected: Vec<ScoredDocument> =
            results.into_iter().filter(|r| r.score >= threshold).collect();
        if selected.is_empty() {
            info!(scanned = documents.len(), "no document cleared the similarity threshold");
            return Ok(AnswerResult { answer: NOT_FOUND_ANSWER.to_string(), references: vec![] });
        }

        // 5. Prompt from bounded excerpts of the selected documents
        let prompt = build_prompt(question, &selected, self.config.excerpt_budget);

        // 6. Completion via whichever variant was selected at startup
        let answer = self.completion_provider.complete(&prompt).await?;

        // 7. Titles in search-result order become the references
        let references: Vec<String> =
            selected.iter().map(|r| r.document.title.clone()).collect();

        info!(
            provider = self.completion_provider.name(),
            reference_count = references.len(),
            top_score = selected[0].score as f64,
            "answered question"
        );

        Ok(AnswerResult { answer, references })
    }
}

/// Builder for constructing an [`AnswerEngine`].
///
/// All fields are required. Call [`build()`](AnswerEngineBuilder::build) to
/// validate and produce the engine.
#[derive(Default)]
pub struct AnswerEngineBuilder {
    config: Option<RagConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    completion_provider: Option<Arc<dyn CompletionProvider>>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl AnswerEngineBuilder {
    /// Set the engine configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the completion provider.
    pub fn completion_provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.completion_provider = Some(provider);
        self
    }

    /// Set the document store.
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the [`AnswerEngine`], validating that all fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`LoreError::Config`] if any required field is missing.
    pub fn build(self) -> Result<AnswerEngine> {
        let config =
            self.config.ok_or_else(|| LoreError::Config("config is required".to_string()))?;
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| LoreError::Config("embedding_provider is required".to_string()))?;
        let completion_provider = self
            .completion_provider
            .ok_or_else(|| LoreError::Config("completion_provider is required".to_string()))?;
        let store =
            self.store.ok_or_else(|| LoreError::Config("store is required".to_string()))?;

        Ok(AnswerEngine { config, embedding_provider, completion_provider, store })
    }
}
