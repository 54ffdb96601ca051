//! Router tests driven through `tower::ServiceExt::oneshot`, no sockets.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use lore_core::{AnswerResult, EmbeddingProvider, NewDocument};
use lore_model::mock::{MockCompletion, MockEmbedding};
use lore_rag::{AnswerEngine, DocumentStore, InMemoryDocumentStore, NOT_FOUND_ANSWER, RagConfig};
use lore_server::server::ErrorBody;
use lore_server::{AppState, app_router};

async fn state_with_documents(documents: Vec<(&str, &str)>) -> AppState {
    let embedder = Arc::new(MockEmbedding::new(16));
    let store = Arc::new(InMemoryDocumentStore::new());
    for (title, content) in documents {
        let embedding = embedder.embed(content).await.unwrap();
        store
            .insert(&NewDocument {
                title: title.into(),
                url: None,
                author: None,
                published_date: None,
                categories: None,
                content: content.into(),
                embedding,
            })
            .await
            .unwrap();
    }

    let engine = AnswerEngine::builder()
        .config(RagConfig::default())
        .embedding_provider(embedder)
        .completion_provider(Arc::new(MockCompletion::new("a grounded answer")))
        .store(store)
        .build()
        .unwrap();

    AppState::new(Arc::new(engine))
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_liveness() {
    let app = app_router(state_with_documents(vec![]).await);

    let response =
        app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn empty_question_maps_to_validation_envelope() {
    let app = app_router(state_with_documents(vec![]).await);

    let response = app.oneshot(chat_request(r#"{"question": "  "}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.kind, "validation");
}

#[tokio::test]
async fn malformed_body_maps_to_validation_envelope() {
    let app = app_router(state_with_documents(vec![]).await);

    let response = app.oneshot(chat_request(r#"{"quest"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.kind, "validation");
    assert!(body.message.contains("malformed request body"));
}

#[tokio::test]
async fn unknown_fields_are_rejected_at_the_boundary() {
    let app = app_router(state_with_documents(vec![]).await);

    let response = app
        .oneshot(chat_request(r#"{"question": "ok", "conversation_id": "x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn matching_question_returns_answer_with_references() {
    // The hash-based mock embeds equal texts identically, so asking with
    // the stored content verbatim scores a cosine similarity of 1.0.
    let app = app_router(
        state_with_documents(vec![("Alkaline Water", "alkaline water basics")]).await,
    );

    let response =
        app.oneshot(chat_request(r#"{"question": "alkaline water basics"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: AnswerResult = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.answer, "a grounded answer");
    assert_eq!(body.references, vec!["Alkaline Water".to_string()]);
}

#[tokio::test]
async fn empty_store_returns_the_not_found_sentinel() {
    let app = app_router(state_with_documents(vec![]).await);

    let response =
        app.oneshot(chat_request(r#"{"question": "anything at all"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: AnswerResult = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.answer, NOT_FOUND_ANSWER);
    assert!(body.references.is_empty());
}
