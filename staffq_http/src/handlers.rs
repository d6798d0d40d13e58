//! HTTP request handlers.

use axum::{Json, extract::State, response::Html};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use staffq_core::{Answer, QueryDispatcher, QueryErrorKind};
use staffq_directory::DirectoryStore;
use staffq_nlp::PatternRecognizer;

use crate::page;

/// Application state shared across handlers.
///
/// Built once at startup; the dispatcher and its collaborators are
/// injected here instead of living in process-wide globals.
pub struct ApiState {
    pub dispatcher: QueryDispatcher<DirectoryStore, PatternRecognizer>,
}

impl ApiState {
    #[must_use]
    pub const fn new(dispatcher: QueryDispatcher<DirectoryStore, PatternRecognizer>) -> Self {
        Self { dispatcher }
    }
}

/// Query request body.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Query response body: a plain string or an array of names.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub response: Answer,
}

/// POST /query - answer one natural-language question.
///
/// Every outcome is HTTP 200: domain-level non-matches are answers, not
/// protocol failures. Store failures are rendered as a flat message too,
/// after being logged.
pub async fn query_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    info!("Query: {}", request.query);

    let answer = match state.dispatcher.handle(&request.query).await {
        Ok(answer) => answer,
        Err(err) => {
            if err.kind() == QueryErrorKind::Failure {
                warn!("Query failed: {err}");
            }
            Answer::Text(err.to_string())
        }
    };

    Json(QueryResponse { response: answer })
}

/// GET / - the embedded single-page UI.
pub async fn index_handler() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}
