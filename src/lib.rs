//! Rapor - server-side score chart server.
//!
//! Renders four canned charts (pie, bar, line, doughnut) to PNG and serves
//! them embedded as base64 data URIs in a single HTML page.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod charts;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
