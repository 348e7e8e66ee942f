use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::DocumentKind;

/// Rendered export, sent as a file download and never stored.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl GeneratedDocument {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.kind.filename())
    }
}

impl IntoResponse for GeneratedDocument {
    fn into_response(self) -> Response {
        let disposition = self.content_disposition();
        (
            [
                (header::CONTENT_TYPE, self.kind.content_type().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}
