use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::ApiError;
use crate::server::AppState;

/// Serve the assembled report page.
///
/// Every request resolves here regardless of method or path and receives
/// the same document. Composition is CPU-bound, so it runs on the blocking
/// pool to avoid starving the async runtime.
pub async fn handle_page(State(state): State<AppState>) -> Result<Response, ApiError> {
    let pages = state.pages.clone();
    let html = tokio::task::spawn_blocking(move || pages.assemble())
        .await
        .map_err(|e| ApiError::Internal(format!("Render task failed: {e}")))??;

    Ok(Html(html).into_response())
}
