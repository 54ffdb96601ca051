//! # lore-core
//!
//! Shared types for the `lore` question-answering service.
//!
//! This crate defines the data model ([`Document`], [`NewDocument`],
//! [`AnswerResult`]), the error taxonomy ([`LoreError`]), and the two
//! capability traits the rest of the workspace is built against:
//!
//! - [`EmbeddingProvider`] — text → fixed-length vector
//! - [`CompletionProvider`] — prompt → generated text
//!
//! Concrete backends live in `lore-model`; storage and search live in
//! `lore-rag`.

pub mod completion;
pub mod document;
pub mod embedding;
pub mod error;

pub use completion::{CompletionProvider, ProviderVariant};
pub use document::{AnswerResult, Document, NewDocument};
pub use embedding::EmbeddingProvider;
pub use error::{LoreError, Result};
