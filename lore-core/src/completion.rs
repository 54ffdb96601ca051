//! Completion provider trait for generating answer text.

use async_trait::async_trait;

use crate::error::Result;

/// Which interchangeable backend a completion provider implements.
///
/// Selection between the two is a pure function of configuration: a
/// non-empty remote credential selects [`Remote`](ProviderVariant::Remote),
/// otherwise [`Local`](ProviderVariant::Local). There is no runtime
/// fallback from one variant to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderVariant {
    /// A local inference server on a well-known local address.
    Local,
    /// A hosted completion API reached with a bearer credential.
    Remote,
}

impl ProviderVariant {
    /// Lowercase label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderVariant::Local => "local",
            ProviderVariant::Remote => "remote",
        }
    }
}

/// A text-completion backend.
///
/// Both variants normalize to the same result and error shape so the
/// orchestrator is agnostic to which one was selected. Implementations
/// must apply a bounded request timeout and map it to
/// [`LoreError::ProviderTimeout`](crate::LoreError::ProviderTimeout);
/// every other transport or decode failure maps to
/// [`LoreError::ProviderUnavailable`](crate::LoreError::ProviderUnavailable)
/// naming the backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Backend name used in logs and error envelopes (`ollama`, `groq`).
    fn name(&self) -> &str;

    /// Which selection variant this provider implements.
    fn variant(&self) -> ProviderVariant;
}
