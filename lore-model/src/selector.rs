//! Configuration-driven choice between the two completion variants.
//!
//! Selection is a pure function of [`ProviderConfig`]: a non-empty remote
//! credential picks the hosted backend, anything else picks the local one.
//! The choice is made once at startup; there is no per-request re-check and
//! no runtime fallback between variants.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use lore_core::{CompletionProvider, Result};

use crate::groq::{DEFAULT_GROQ_MODEL, GroqClient};
use crate::ollama::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, OllamaClient};

/// Everything needed to construct either completion variant.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Remote credential; `Some` and non-empty selects the Remote variant.
    pub groq_api_key: Option<String>,
    /// Hosted model name.
    pub groq_model: String,
    /// Local inference server address.
    pub ollama_url: String,
    /// Local model name, assumed to already be pulled on the server.
    pub ollama_model: String,
    /// One bounded timeout covering the slower (local) variant's worst case.
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.into(),
            ollama_url: DEFAULT_OLLAMA_URL.into(),
            ollama_model: DEFAULT_OLLAMA_MODEL.into(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ProviderConfig {
    /// Whether the Remote variant would be selected.
    pub fn remote_selected(&self) -> bool {
        self.groq_api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Construct the completion provider the configuration selects.
///
/// # Errors
///
/// Returns [`LoreError::Config`](lore_core::LoreError::Config) if the
/// selected variant cannot be constructed from the given values.
pub fn select_provider(config: &ProviderConfig) -> Result<Arc<dyn CompletionProvider>> {
    if config.remote_selected() {
        let key = config.groq_api_key.as_deref().unwrap_or_default();
        let client = GroqClient::new(key, &config.groq_model, config.request_timeout)?;
        info!(variant = "remote", model = %config.groq_model, "selected completion provider");
        Ok(Arc::new(client))
    } else {
        let client = OllamaClient::new(
            &config.ollama_url,
            &config.ollama_model,
            config.request_timeout,
        )?;
        info!(variant = "local", model = %config.ollama_model, "selected completion provider");
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lore_core::ProviderVariant;

    #[test]
    fn absent_credential_selects_local() {
        let config = ProviderConfig::default();
        let provider = select_provider(&config).unwrap();
        assert_eq!(provider.variant(), ProviderVariant::Local);
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    fn empty_credential_selects_local() {
        let config = ProviderConfig { groq_api_key: Some(String::new()), ..Default::default() };
        let provider = select_provider(&config).unwrap();
        assert_eq!(provider.variant(), ProviderVariant::Local);
    }

    #[test]
    fn present_credential_selects_remote() {
        let config =
            ProviderConfig { groq_api_key: Some("gsk_test".into()), ..Default::default() };
        let provider = select_provider(&config).unwrap();
        assert_eq!(provider.variant(), ProviderVariant::Remote);
        assert_eq!(provider.name(), "groq");
    }
}
