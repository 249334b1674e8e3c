use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::acquisition::AcquisitionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Extraction(#[from] AcquisitionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Extraction(err) => extraction_response(err),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn extraction_response(err: &AcquisitionError) -> (StatusCode, &'static str, String) {
    match err {
        AcquisitionError::UnsupportedFileType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_FILE_TYPE",
            format!("{err}. Upload a PDF or an image"),
        ),
        AcquisitionError::EmptyDocument => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "EMPTY_DOCUMENT",
            err.to_string(),
        ),
        AcquisitionError::Decode(_) | AcquisitionError::Recognition(_) => {
            tracing::warn!("Resume analysis failed: {err}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ANALYSIS_FAILED",
                "Failed to analyze resume".to_string(),
            )
        }
        AcquisitionError::Timeout(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            "ANALYSIS_TIMEOUT",
            err.to_string(),
        ),
        AcquisitionError::Io(e) => {
            tracing::error!("I/O error during extraction: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            )
        }
    }
}
