use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ChartKind;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Page error: {0}")]
    Page(#[from] crate::services::page::PageError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Dataset has {values} values for {labels} labels")]
    DatasetMismatch { values: usize, labels: usize },

    #[error("No renderer registered for chart kind: {0}")]
    UnregisteredKind(ChartKind),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Composition has no partial-failure path: any error aborts the
        // whole response as a 500.
        let (status, message) = match &self {
            ApiError::Page(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
