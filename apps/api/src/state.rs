use std::sync::Arc;

use crate::config::Config;
use crate::estimation::generator::EstimateGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable estimate generator. Default: the Mistral-backed `LlmClient`.
    pub generator: Arc<dyn EstimateGenerator>,
    pub config: Config,
}
