use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{Document, DocumentKind, InvoiceFields, RiskAssessment, ValidationReport};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProcessInvoiceResponse {
    pub success: bool,
    pub data: InvoiceFields,
    pub validation: ValidationReport,
    pub risk_score: RiskAssessment,
}

#[derive(Serialize)]
pub struct ProcessingErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_invoice_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Process request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field.content_type().map(str::to_owned);

    tracing::debug!(
        filename = %filename,
        content_type = ?content_type,
        "Processing invoice upload"
    );

    // The content type wins when the client sends one we know; otherwise the
    // filename extension decides.
    let kind = content_type
        .as_deref()
        .and_then(DocumentKind::from_mime)
        .or_else(|| DocumentKind::from_filename(&filename));
    let kind = match kind {
        Some(kind) => kind,
        None => {
            tracing::warn!(
                filename = %filename,
                content_type = ?content_type,
                "Unsupported document type"
            );
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!(
                        "Unsupported document type: {}",
                        content_type.as_deref().unwrap_or("unknown")
                    ),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(bytes = data.len(), "File data received");

    let document = Document::new(filename, kind, data.len() as u64);

    match state.processing_service.process(&data, &document).await {
        Ok(processed) => (
            StatusCode::OK,
            Json(ProcessInvoiceResponse {
                success: true,
                data: processed.fields,
                validation: processed.validation,
                risk_score: processed.risk,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Invoice processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProcessingErrorResponse {
                    success: false,
                    error: format!("Error processing invoice: {}", e),
                }),
            )
                .into_response()
        }
    }
}
