//! Axum route handlers for the estimate endpoints.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::estimation::extract::extract_pdf_text;
use crate::estimation::generator::generate_estimate;
use crate::state::AppState;

/// Multipart field carrying the uploaded scope PDF.
const UPLOAD_FIELD: &str = "file";
/// Scope used by the feedback endpoint when the client sends none.
pub const PREVIOUS_SCOPE_PLACEHOLDER: &str = "Based on previous scope";

/// Body of the feedback and download endpoints. Both fields may be absent or null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimationRequest {
    pub scope_text: Option<String>,
    pub feedback: Option<String>,
}

/// POST /api/estimate/upload
///
/// Extracts the text of the uploaded PDF and returns a fresh markdown estimate.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some(data);
            break;
        }
    }

    let data = upload.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{UPLOAD_FIELD}' is required"))
    })?;
    info!("Received scope PDF: {} bytes", data.len());

    let scope_text = extract_pdf_text(data).await?;
    generate_estimate(state.generator.as_ref(), &scope_text, None).await
}

/// POST /api/estimate/feedback
///
/// Regenerates the estimate from scratch with the user's feedback folded into the prompt.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<EstimationRequest>,
) -> Result<String, AppError> {
    let scope_text = match request.scope_text.as_deref() {
        Some(scope) if !scope.trim().is_empty() => scope,
        _ => PREVIOUS_SCOPE_PLACEHOLDER,
    };

    generate_estimate(
        state.generator.as_ref(),
        scope_text,
        request.feedback.as_deref(),
    )
    .await
}
