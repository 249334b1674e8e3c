//! Axum route handlers for the Resume Extraction API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::defaults::FormDefaults;
use crate::extraction::{extract_from_text, SourceInfo};
use crate::models::resume::ExtractedResumeData;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub data: ExtractedResumeData,
    pub defaults: FormDefaults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
}

impl ExtractResponse {
    fn new(data: ExtractedResumeData, source: Option<SourceInfo>) -> Self {
        Self {
            defaults: FormDefaults::from(&data),
            data,
            source,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/extract
///
/// Accepts a multipart upload with a `file` part. The part's declared content
/// type selects the acquisition route.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file part", e))?;

        info!(
            file_name = %file_name,
            content_type = %content_type,
            bytes = bytes.len(),
            "Resume upload received"
        );

        let extraction = state.extractor.extract(&bytes, &content_type).await?;
        return Ok(Json(ExtractResponse::new(
            extraction.data,
            Some(extraction.source),
        )));
    }

    Err(AppError::Validation(format!(
        "Multipart body must include a '{FILE_FIELD}' part"
    )))
}

/// Keeps the body-limit rejection distinguishable from a malformed upload.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", err.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

/// POST /api/v1/resumes/extract/text
///
/// Runs the pattern passes over text the client already has.
pub async fn handle_extract_text(
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }

    let data = extract_from_text(&request.text)?;
    Ok(Json(ExtractResponse::new(data, None)))
}
