use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Acquisition plus assembly. The OCR engine behind it is pluggable.
    pub extractor: Arc<ResumeExtractor>,
}
