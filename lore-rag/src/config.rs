//! Configuration for search and answer assembly.

use serde::{Deserialize, Serialize};

use lore_core::{LoreError, Result};

/// Tunables for the retrieval half of the request path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Number of top results to keep from the similarity scan.
    pub top_k: usize,
    /// Minimum cosine score a result must reach to be used as context.
    /// Results below this produce the not-found sentinel instead.
    pub similarity_threshold: f32,
    /// Maximum number of characters of each document's content to place
    /// into the prompt.
    pub excerpt_budget: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { top_k: 2, similarity_threshold: 0.30, excerpt_budget: 1500 }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the number of top results to keep from the similarity scan.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the minimum similarity score for usable context.
    pub fn similarity_threshold(mut self, threshold: f32) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Set the per-document excerpt budget in characters.
    pub fn excerpt_budget(mut self, budget: usize) -> Self {
        self.config.excerpt_budget = budget;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`LoreError::Config`] if:
    /// - `top_k == 0`
    /// - `similarity_threshold` is outside the cosine range [-1, 1]
    /// - `excerpt_budget == 0`
    pub fn build(self) -> Result<RagConfig> {
        if self.config.top_k == 0 {
            return Err(LoreError::Config("top_k must be greater than zero".to_string()));
        }
        if !(-1.0..=1.0).contains(&self.config.similarity_threshold) {
            return Err(LoreError::Config(format!(
                "similarity_threshold ({}) must be within [-1, 1]",
                self.config.similarity_threshold
            )));
        }
        if self.config.excerpt_budget == 0 {
            return Err(LoreError::Config("excerpt_budget must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RagConfig::builder().build().unwrap();
        assert_eq!(config, RagConfig::default());
    }

    #[test]
    fn zero_top_k_is_rejected() {
        assert!(RagConfig::builder().top_k(0).build().is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        assert!(RagConfig::builder().similarity_threshold(1.5).build().is_err());
        assert!(RagConfig::builder().similarity_threshold(-1.5).build().is_err());
    }

    #[test]
    fn zero_excerpt_budget_is_rejected() {
        assert!(RagConfig::builder().excerpt_budget(0).build().is_err());
    }
}
