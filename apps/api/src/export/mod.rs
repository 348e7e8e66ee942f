// Export: markdown estimate → ordered sections → PDF or DOCX download.
// Rendering is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod document;
pub mod docx;
pub mod font_metrics;
pub mod handlers;
pub mod pdf;
pub mod sections;
