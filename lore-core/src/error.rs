//! Error types shared across the `lore` workspace.

use thiserror::Error;

/// Errors that can occur in the question-answering pipeline.
///
/// Every failure reaching the HTTP boundary is mapped to a uniform
/// envelope of [`kind()`](LoreError::kind) plus message. "No relevant
/// document found" is deliberately *not* an error; it is a successful
/// answer with the not-found sentinel and no references.
#[derive(Debug, Error)]
pub enum LoreError {
    /// The request was rejected at the boundary; never retried.
    #[error("validation error: {0}")]
    Validation(String),

    /// The relational document store is unreachable or a query failed.
    #[error("document store error: {message}")]
    Store {
        /// A description of the failure.
        message: String,
    },

    /// The selected completion backend is unreachable, returned a
    /// non-success status, or produced a malformed response. Names the
    /// variant so operators can tell local from remote misconfiguration.
    #[error("completion provider '{variant}' unavailable: {message}")]
    ProviderUnavailable {
        /// Which backend failed (`ollama` or `groq`).
        variant: String,
        /// A description of the failure.
        message: String,
    },

    /// The completion call exceeded the configured timeout. The caller may
    /// retry the whole request; the system does not retry on its own.
    #[error("completion provider '{variant}' timed out after {seconds}s")]
    ProviderTimeout {
        /// Which backend timed out (`ollama` or `groq`).
        variant: String,
        /// The configured timeout that was exceeded.
        seconds: u64,
    },

    /// An error occurred during embedding generation.
    #[error("embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A stored document carries an invalid or mis-sized embedding.
    /// Rejected on write; logged and skipped on read.
    #[error("corrupt record {id}: {message}")]
    CorruptRecord {
        /// Store id of the offending row (0 for not-yet-inserted rows).
        id: i64,
        /// What was wrong with the embedding.
        message: String,
    },

    /// A configuration validation error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LoreError {
    /// Stable machine-readable kind, used in the HTTP error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            LoreError::Validation(_) => "validation",
            LoreError::Store { .. } => "store_unavailable",
            LoreError::ProviderUnavailable { .. } => "provider_unavailable",
            LoreError::ProviderTimeout { .. } => "provider_timeout",
            LoreError::Embedding { .. } => "embedding",
            LoreError::CorruptRecord { .. } => "corrupt_record",
            LoreError::Config(_) => "config",
        }
    }
}

/// A convenience result type for lore operations.
pub type Result<T> = std::result::Result<T, LoreError>;
