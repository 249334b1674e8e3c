pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume Extraction API
        .route("/api/v1/resumes/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/resumes/extract/text",
            post(handlers::handle_extract_text),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
