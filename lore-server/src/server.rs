//! Router, handlers, and the uniform error envelope.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use lore_core::{AnswerResult, LoreError};
use lore_rag::AnswerEngine;

use crate::config::Config;

/// Shared request-path state: the engine holds every collaborator behind
/// `Arc`s, so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AnswerEngine>,
}

impl AppState {
    /// Wrap an engine for the router.
    pub fn new(engine: Arc<AnswerEngine>) -> Self {
        Self { engine }
    }
}

/// Body of `POST /chat`. Unknown fields are rejected at the boundary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    /// The user's question.
    pub question: String,
}

/// Uniform error envelope: a stable kind plus a human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

fn error_response(err: &LoreError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        LoreError::Validation(_) => StatusCode::BAD_REQUEST,
        LoreError::Store { .. } => StatusCode::SERVICE_UNAVAILABLE,
        LoreError::ProviderUnavailable { .. } => StatusCode::BAD_GATEWAY,
        LoreError::ProviderTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorBody { kind: err.kind().to_string(), message: err.to_string() }))
}

/// Build the service router.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let app = app_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| "invalid host/port for lore-server")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("lore-server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "lore"}))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, (StatusCode, Json<ErrorBody>)> {
    // A body that fails to deserialize is a client mistake, reported in the
    // same envelope as every other failure.
    let Json(request) = payload.map_err(|rejection| {
        error_response(&LoreError::Validation(format!("malformed request body: {rejection}")))
    })?;

    let result = state
        .engine
        .answer(&request.question)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(result))
}
