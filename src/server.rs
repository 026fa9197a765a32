//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both the
//! production server and integration tests.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::services::{ChartComposer, PageAssembler};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<ChartComposer>,
    pub pages: Arc<PageAssembler>,
}

/// Create the application state.
///
/// Chart-renderer registration and font loading happen here, once, before
/// the listener starts accepting connections.
pub fn create_app_state() -> anyhow::Result<AppState> {
    let composer = Arc::new(ChartComposer::new());
    let pages = Arc::new(
        PageAssembler::new(composer.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create page assembler: {e}"))?,
    );

    Ok(AppState { composer, pages })
}

/// Build the router. There is one implicit route: every method and path
/// falls through to the page handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(api::handle_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
