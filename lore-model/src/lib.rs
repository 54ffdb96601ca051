//! # lore-model
//!
//! Provider backends for `lore`: the two completion variants, the
//! configuration-driven selector, and the local embedding backend.
//!
//! ## Overview
//!
//! - [`OllamaClient`] — local inference server, `/api/generate`
//! - [`GroqClient`] — hosted OpenAI-compatible chat completions
//! - [`OllamaEmbedding`] — local `/api/embeddings` backend
//! - [`select_provider`] — pure-config choice between the two variants
//! - [`mock`] — deterministic in-process test doubles
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use lore_model::{ProviderConfig, select_provider};
//!
//! let config = ProviderConfig::default();
//! let provider = select_provider(&config)?; // Local unless a credential is set
//! let answer = provider.complete("...").await?;
//! ```

pub mod groq;
pub mod mock;
pub mod ollama;
pub mod selector;

pub use groq::GroqClient;
pub use ollama::{OllamaClient, OllamaEmbedding};
pub use selector::{ProviderConfig, select_provider};
