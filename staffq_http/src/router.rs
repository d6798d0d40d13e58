//! Router assembly.

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use staffq_config::ServerConfig;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{ApiState, index_handler, query_handler};

/// Create the application router.
///
/// Endpoints:
/// - GET  /       - embedded HTML page
/// - POST /query  - natural-language query endpoint
pub fn create_router(state: Arc<ApiState>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/query", post(query_handler))
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}
