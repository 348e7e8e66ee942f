pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::estimation::handlers as estimation;
use crate::export::handlers as export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Estimate API
        .route("/api/estimate/upload", post(estimation::handle_upload))
        .route("/api/estimate/feedback", post(estimation::handle_feedback))
        // Export API
        .route("/api/download/pdf", post(export::handle_download_pdf))
        .route("/api/download/docx", post(export::handle_download_docx))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
