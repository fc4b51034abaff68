use std::io::ErrorKind;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::services::snapshot_file::{self, SnapshotFileError};
use crate::state::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Serve the snapshot file as-is, re-read on every request so a replaced
/// file is picked up without a restart.
pub async fn get_snapshot(State(state): State<AppState>) -> Response {
    match snapshot_file::read_raw(&state.snapshot_path).await {
        Ok(bytes) => {
            let mut response = bytes.into_response();
            let headers = response.headers_mut();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
            response
        }
        Err(SnapshotFileError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %state.snapshot_path.display(), "snapshot file not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %state.snapshot_path.display(), "failed to read snapshot file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
