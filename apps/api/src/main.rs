mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::ocr::{OcrEngine, TesseractEngine};
use crate::extraction::ResumeExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ApplyFirst API v{}", env!("CARGO_PKG_VERSION"));

    // OCR engine for image uploads
    let ocr: Arc<dyn OcrEngine> = Arc::new(TesseractEngine::new(
        config.tesseract_bin.clone(),
        config.ocr_language.clone(),
    ));
    info!(
        "OCR engine: {} ({}, lang={})",
        ocr.name(),
        config.tesseract_bin,
        config.ocr_language
    );

    let extractor = ResumeExtractor::new(ocr, config.extraction_timeout);
    info!(
        "Extraction timeout {:?}, upload limit {} bytes",
        extractor.timeout(),
        config.max_upload_bytes
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(extractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the onboarding frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
