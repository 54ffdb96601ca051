//! Document store trait for persisted articles.

use async_trait::async_trait;

use lore_core::{Document, NewDocument, Result};

/// A storage backend holding articles with precomputed embeddings.
///
/// Writes happen only during offline ingestion; the request path reads the
/// whole table and scans it. Each insert is a single atomic row write, so a
/// live service never observes a half-written document.
///
/// # Example
///
/// ```rust,ignore
/// use lore_rag::{DocumentStore, MySqlDocumentStore};
///
/// let store = MySqlDocumentStore::connect(&config, 384).await?;
/// store.insert(&new_document).await?;
/// let documents = store.fetch_all().await?;
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, returning the store-assigned id.
    async fn insert(&self, document: &NewDocument) -> Result<i64>;

    /// Fetch every stored document in insertion (id) order.
    ///
    /// Rows with undecodable or mis-sized embeddings are skipped with a
    /// warning, never failing the read.
    async fn fetch_all(&self) -> Result<Vec<Document>>;

    /// Whether a document with this source URL is already stored.
    async fn contains_url(&self, url: &str) -> Result<bool>;
}
