use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub status: String,
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfoResponse {
            service: "invoice-engine".to_string(),
            status: "running".to_string(),
        }),
    )
}
