//! Text Extractor — plain text of every page of an uploaded PDF.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts all text from an in-memory PDF on the blocking pool.
///
/// A malformed document fails the request; there is no partial-text fallback.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Extraction(format!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Extraction(format!("Unreadable PDF: {e}")))?;

    debug!("Extracted {} chars from {size}-byte PDF", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_an_extraction_error() {
        let result = extract_pdf_text(Bytes::from_static(b"this is not a pdf")).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_an_extraction_error() {
        let result = extract_pdf_text(Bytes::new()).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
