//! Axum web server exposing the NER markup pipeline over HTTP

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use nertag_core::{MarkupError, NerAnnotator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application state
struct AppState {
    annotator: NerAnnotator,
}

#[derive(Deserialize)]
struct AnnotateRequest {
    text: String,
}

#[derive(Serialize)]
struct SpanView {
    text: String,
    label: String,
    color: &'static str,
}

#[derive(Serialize)]
struct AnnotateResponse {
    annotated: String,
    spans: Vec<SpanView>,
    total_tokens: usize,
    processing_ms: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let state = Arc::new(AppState {
        annotator: NerAnnotator::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/annotate", post(annotate_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("nertag server listening on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Returns the demo page
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// Annotates posted text and returns the marked-up string plus span details
async fn annotate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnnotateRequest>,
) -> impl IntoResponse {
    match state.annotator.annotate_detailed(&req.text) {
        Ok(result) => {
            let spans = result
                .spans
                .iter()
                .map(|span| SpanView {
                    text: span.text(),
                    label: span.label.to_string(),
                    color: span.label.color(),
                })
                .collect();
            Json(AnnotateResponse {
                annotated: result.annotated,
                spans,
                total_tokens: result.total_tokens,
                processing_ms: result.processing_ms,
            })
            .into_response()
        }
        Err(err @ MarkupError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": err.to_string()})),
        )
            .into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": err.to_string()})),
        )
            .into_response(),
    }
}
