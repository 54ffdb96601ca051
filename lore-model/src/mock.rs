//! Deterministic in-process test doubles for both provider traits.
//!
//! Both mocks count their calls so tests can assert that validation
//! failures short-circuit before any provider work happens.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use lore_core::{CompletionProvider, EmbeddingProvider, ProviderVariant, Result};

/// A [`CompletionProvider`] that returns a canned reply.
pub struct MockCompletion {
    reply: String,
    calls: AtomicUsize,
}

impl MockCompletion {
    /// Create a mock that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), calls: AtomicUsize::new(0) }
    }

    /// How many times `complete` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn variant(&self) -> ProviderVariant {
        ProviderVariant::Local
    }
}

/// An [`EmbeddingProvider`] producing deterministic hash-derived vectors.
///
/// The direction of the vector depends only on the text content, so equal
/// inputs always embed identically. Vectors are L2-normalized, making
/// cosine similarity a plain dot product.
pub struct MockEmbedding {
    dimensions: usize,
    calls: AtomicUsize,
}

impl MockEmbedding {
    /// Create a mock with the given output dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions, calls: AtomicUsize::new(0) }
    }

    /// How many times `embed` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let hash = text.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        let mut emb = vec![0.0f32; self.dimensions];
        for (i, v) in emb.iter_mut().enumerate() {
            *v = ((hash.wrapping_add(i as u64)) as f32).sin();
        }
        let norm: f32 = emb.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            emb.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(emb)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
