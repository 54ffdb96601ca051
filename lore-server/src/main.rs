use std::sync::Arc;

use tracing::{info, warn};

use lore_core::{CompletionProvider, ProviderVariant};
use lore_model::ollama::OllamaEmbedding;
use lore_model::select_provider;
use lore_rag::{AnswerEngine, MySqlDocumentStore};
use lore_server::{AppState, Config, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    // Fail fast if the store is unreachable; operators fix this, not retries.
    let store = MySqlDocumentStore::connect(&config.db, config.embed_dimensions).await?;
    store.ensure_schema().await?;

    let embedder = Arc::new(OllamaEmbedding::new(
        &config.provider.ollama_url,
        &config.embed_model,
        config.embed_dimensions,
        config.provider.request_timeout,
    )?);

    let completion = select_provider(&config.provider)?;

    // A cold local model takes 10-15s on its first generation; issue one
    // tiny request in the background so the first user doesn't pay for it.
    if completion.variant() == ProviderVariant::Local {
        tokio::spawn(warm_up(completion.clone()));
    }

    let engine = AnswerEngine::builder()
        .config(config.rag.clone())
        .embedding_provider(embedder)
        .completion_provider(completion)
        .store(Arc::new(store))
        .build()?;

    let state = AppState::new(Arc::new(engine));
    run_server(&config, state).await
}

async fn warm_up(provider: Arc<dyn CompletionProvider>) {
    match provider.complete("Hello").await {
        Ok(_) => info!("local model warmed up"),
        Err(e) => warn!(error = %e, "local model warm-up failed; first request may be slow"),
    }
}
