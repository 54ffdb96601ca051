//! Embedding provider trait for generating vector embeddings from text.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that converts text into a fixed-length embedding vector.
///
/// Treated as an opaque, deterministic text → vector function. Every vector
/// a provider returns has exactly [`dimensions()`](EmbeddingProvider::dimensions)
/// elements; the document store enforces this on write.
///
/// # Example
///
/// ```rust,ignore
/// use lore_core::EmbeddingProvider;
///
/// let embedding = provider.embed("breast cancer risk factors").await?;
/// assert_eq!(embedding.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
