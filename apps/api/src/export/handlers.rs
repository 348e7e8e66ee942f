//! Axum route handlers for the download endpoints.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::{AppError, DocumentKind};
use crate::estimation::generator::generate_estimate;
use crate::estimation::handlers::EstimationRequest;
use crate::export::document::GeneratedDocument;
use crate::export::docx::render_docx;
use crate::export::pdf::render_pdf;
use crate::export::sections::parse_sections;
use crate::state::AppState;

/// POST /api/download/pdf
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Json(request): Json<EstimationRequest>,
) -> Result<GeneratedDocument, AppError> {
    export_estimate(&state, &request, DocumentKind::Pdf).await
}

/// POST /api/download/docx
pub async fn handle_download_docx(
    State(state): State<AppState>,
    Json(request): Json<EstimationRequest>,
) -> Result<GeneratedDocument, AppError> {
    export_estimate(&state, &request, DocumentKind::Docx).await
}

/// Generates a fresh estimate, splits it into sections and renders it.
async fn export_estimate(
    state: &AppState,
    request: &EstimationRequest,
    kind: DocumentKind,
) -> Result<GeneratedDocument, AppError> {
    let estimate = generate_estimate(
        state.generator.as_ref(),
        request.scope_text.as_deref().unwrap_or(""),
        request.feedback.as_deref(),
    )
    .await?;

    let sections = parse_sections(&estimate);
    info!("Exporting {kind} with {} sections", sections.len());

    // CPU-bound rendering — spawn_blocking to avoid blocking the async executor.
    let bytes = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => render_pdf(&sections),
        DocumentKind::Docx => render_docx(&sections),
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed rendering {kind}: {e}")))??;

    Ok(GeneratedDocument { kind, bytes })
}
