//! In-memory document store for tests and demos.

use async_trait::async_trait;
use tokio::sync::RwLock;

use lore_core::{Document, NewDocument, Result};

use crate::store::DocumentStore;

/// A [`DocumentStore`] backed by a `Vec` behind a `tokio::sync::RwLock`.
///
/// Ids are assigned sequentially from 1, matching the relational backend's
/// auto-increment behavior. Unlike the MySQL store it performs no
/// dimension check on write, which lets tests stage corrupt rows and
/// verify they are skipped downstream.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, document: &NewDocument) -> Result<i64> {
        let mut documents = self.documents.write().await;
        let id = documents.last().map(|d| d.id + 1).unwrap_or(1);
        documents.push(Document {
            id,
            title: document.title.clone(),
            url: document.url.clone(),
            author: document.author.clone(),
            published_date: document.published_date.clone(),
            categories: document.categories.clone(),
            content: document.content.clone(),
            embedding: document.embedding.clone(),
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.clone())
    }

    async fn contains_url(&self, url: &str) -> Result<bool> {
        let documents = self.documents.read().await;
        Ok(documents.iter().any(|d| d.url.as_deref() == Some(url)))
    }
}
