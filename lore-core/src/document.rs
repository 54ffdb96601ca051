//! Data types for stored documents and answers.

use serde::{Deserialize, Serialize};

/// A scraped article with its precomputed embedding.
///
/// Documents are created exactly once during ingestion and are immutable
/// afterwards. The embedding is produced at ingest time and persisted
/// verbatim; it is never recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,
    /// Article title. The only required piece of metadata.
    pub title: String,
    /// Canonical source URL, used for ingest deduplication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date as scraped from the page, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Full extracted article text.
    pub content: String,
    /// Fixed-length embedding vector. Every document in a store has the
    /// same length, fixed by the embedding provider's output dimension.
    pub embedding: Vec<f32>,
}

/// An article ready for insertion. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDocument {
    pub title: String,
    pub url: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub categories: Option<String>,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// The response value for an answered question. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerResult {
    /// Generated answer text.
    pub answer: String,
    /// Titles of the documents used as context, in search-result order.
    /// Empty when no stored document cleared the similarity threshold.
    pub references: Vec<String>,
}
