//! # lore-rag
//!
//! Storage, similarity search, and answer orchestration for `lore`.
//!
//! The [`AnswerEngine`] ties the pieces together: embed the question via an
//! [`EmbeddingProvider`](lore_core::EmbeddingProvider), scan the
//! [`DocumentStore`] with [`search`], and hand the best excerpts to a
//! [`CompletionProvider`](lore_core::CompletionProvider).
//!
//! # Example
//!
//! ```rust,ignore
//! use lore_rag::{AnswerEngine, RagConfig, InMemoryDocumentStore};
//!
//! let engine = AnswerEngine::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(embedder)
//!     .completion_provider(provider)
//!     .store(Arc::new(InMemoryDocumentStore::new()))
//!     .build()?;
//!
//! let result = engine.answer("Is red meat a cancer risk?").await?;
//! ```

pub mod config;
pub mod engine;
pub mod inmemory;
pub mod mysql;
pub mod prompt;
pub mod search;
pub mod store;

pub use config::RagConfig;
pub use engine::{AnswerEngine, AnswerEngineBuilder, NOT_FOUND_ANSWER};
pub use inmemory::InMemoryDocumentStore;
pub use mysql::{DbConfig, MySqlDocumentStore};
pub use search::{ScoredDocument, cosine_similarity, search};
pub use store::DocumentStore;
