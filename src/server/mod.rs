//! JSON HTTP API for the audit pipeline
//!
//! Thin delivery shell over the same use case the CLI drives: a multipart
//! upload endpoint that runs an audit, report retrieval, and artifact
//! downloads. Everything stateful lives in [`AppState`]; handlers are
//! plain async functions.

mod handlers;
mod state;

pub use handlers::{download_csv, download_json, get_report, health_check, upload};
pub use state::AppState;

use crate::shared::Result;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    pub data: Option<T>,
    /// Error message (if failed)
    pub error: Option<String>,
    /// Request ID for tracing
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T, request_id: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            request_id: request_id.to_string(),
        }
    }

    /// Create error response
    pub fn error(message: &str, request_id: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
            request_id: request_id.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Server version
    pub version: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/audit", post(upload))
        .route("/reports/{name}", get(get_report))
        .route("/reports/{name}/csv", get(download_csv))
        .route("/reports/{name}/json", get(download_json))
        .with_state(state)
}

/// Binds the listener and serves until shutdown
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("🚀 req-audit listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
