//! Axum route handler for the PDF export.

use anyhow::anyhow;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::render::pdf::{render_pdf, EXPORT_FILE_NAME};
use crate::state::AppState;

/// Request body: the currently displayed response text at the moment of the click.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

/// POST /api/v1/guidance/export
///
/// Serializes the supplied text into a downloadable PDF. Unavailable while a
/// guidance request is in flight or before any response exists.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    if state.in_flight.is_in_flight() {
        return Err(AppError::RequestInFlight);
    }

    if request.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Nothing to export: no response text".to_string(),
        ));
    }

    // PDF serialization is CPU-bound; keep it off the async worker threads.
    let bytes = tokio::task::spawn_blocking(move || render_pdf(&request.text))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF export task failed: {e}")))??;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
