use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The two export formats. Carries the fixed filename and MIME type of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn filename(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "estimation_report.pdf",
            DocumentKind::Docx => "estimation_report.docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => f.write_str("PDF"),
            DocumentKind::Docx => f.write_str("DOCX"),
        }
    }
}

/// A document renderer failed. Tagged with the format so callers can tell
/// PDF and DOCX failures apart without inspecting the message.
#[derive(Debug, Error)]
#[error("Failed to generate {kind}: {message}")]
pub struct RenderError {
    pub kind: DocumentKind,
    pub message: String,
}

impl RenderError {
    pub fn pdf(cause: impl fmt::Display) -> Self {
        Self {
            kind: DocumentKind::Pdf,
            message: cause.to_string(),
        }
    }

    pub fn docx(cause: impl fmt::Display) -> Self {
        Self {
            kind: DocumentKind::Docx,
            message: cause.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => {
                tracing::error!("Text extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_ERROR",
                    "The uploaded document could not be read".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("{e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    format!("Failed to generate {}", e.kind),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_names_the_format() {
        assert_eq!(
            RenderError::pdf("font missing").to_string(),
            "Failed to generate PDF: font missing"
        );
        assert_eq!(
            RenderError::docx("zip").to_string(),
            "Failed to generate DOCX: zip"
        );
    }

    #[test]
    fn test_render_error_maps_to_500_without_leaking_cause() {
        let (status, code, message) = AppError::from(RenderError::docx("secret cause")).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "RENDER_ERROR");
        assert_eq!(message, "Failed to generate DOCX");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let (status, code, _) = AppError::Validation("missing file".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_document_kind_metadata() {
        assert_eq!(DocumentKind::Pdf.filename(), "estimation_report.pdf");
        assert_eq!(DocumentKind::Pdf.content_type(), "application/pdf");
        assert_eq!(DocumentKind::Docx.filename(), "estimation_report.docx");
        assert!(DocumentKind::Docx.content_type().contains("wordprocessingml"));
    }
}
