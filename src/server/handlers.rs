//! HTTP request handlers
//!
//! Axum handlers for the audit API. Per-declaration registry failures are
//! already data by the time they reach this layer; only structurally
//! invalid requests (no file, missing artifact, unsafe name) map to error
//! statuses here.

use crate::adapters::outbound::formatters::ReportDocument;
use crate::ports::outbound::ArtifactKind;
use crate::server::{ApiResponse, AppState, HealthResponse};
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Generate a request ID
fn request_id() -> String {
    format!("req-{}", uuid::Uuid::new_v4())
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
    };

    (StatusCode::OK, Json(health))
}

/// Upload a requirements file and run the audit pipeline on it
///
/// Expects a multipart form with a `file` field. A missing field or empty
/// filename is a boundary failure (400); everything the pipeline can
/// tolerate ends up inside the report instead.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<ReportDocument>>) {
    let req_id = request_id();

    let mut uploaded: Option<(String, String)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field.file_name().map(str::to_string).unwrap_or_default();
                match field.text().await {
                    Ok(content) => uploaded = Some((filename, content)),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ApiResponse::error(
                                &format!("Failed to read uploaded file: {}", e),
                                &req_id,
                            )),
                        )
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(
                        &format!("Invalid multipart request: {}", e),
                        &req_id,
                    )),
                )
            }
        }
    }

    let Some((filename, content)) = uploaded else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("No file field in upload", &req_id)),
        );
    };

    if filename.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Uploaded file has no filename", &req_id)),
        );
    }

    match state.run_audit(&filename, &content).await {
        Ok(document) => (StatusCode::OK, Json(ApiResponse::success(document, &req_id))),
        Err(e) => {
            let status = if e.to_string().contains("Invalid report name") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::error(&e.to_string(), &req_id)))
        }
    }
}

/// Return the structured report document for a previously audited file
pub async fn get_report(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let req_id = request_id();

    match state.load_artifact(&name, ArtifactKind::Json) {
        Ok(Some(bytes)) => match serde_json::from_slice::<ReportDocument>(&bytes) {
            Ok(document) => (StatusCode::OK, Json(document)).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ReportDocument>::error(
                    &format!("Stored report is unreadable: {}", e),
                    &req_id,
                )),
            )
                .into_response(),
        },
        Ok(None) => not_found(&name, &req_id),
        Err(e) => bad_name(&e.to_string(), &req_id),
    }
}

/// Download the tabular (CSV) artifact as an attachment
pub async fn download_csv(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    download_artifact(state, name, ArtifactKind::Csv).await
}

/// Download the structured-document (JSON) artifact as an attachment
pub async fn download_json(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    download_artifact(state, name, ArtifactKind::Json).await
}

async fn download_artifact(state: AppState, name: String, kind: ArtifactKind) -> Response {
    let req_id = request_id();

    match state.load_artifact(&name, kind) {
        Ok(Some(bytes)) => (
            [
                (
                    header::CONTENT_TYPE,
                    kind.content_type().to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", kind.file_name(&name)),
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(None) => not_found(&name, &req_id),
        Err(e) => bad_name(&e.to_string(), &req_id),
    }
}

fn not_found(name: &str, req_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<ReportDocument>::error(
            &format!("No report found for \"{}\"", name),
            req_id,
        )),
    )
        .into_response()
}

fn bad_name(message: &str, req_id: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<ReportDocument>::error(message, req_id)),
    )
        .into_response()
}

// =============================================================================
// Tests
// =============================================================================
