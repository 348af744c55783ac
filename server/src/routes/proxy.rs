//! Error mapping shared by the authenticated backend proxy routes.
//!
//! Every backend failure becomes `502 Bad Gateway` with a short
//! `{ "error": ... }` body. Detail goes to the log only.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use curator_client::net::types::ErrorBody;

use crate::services::backend::BackendError;

/// Result type for proxy handlers: the backend's JSON or a ready 502.
pub type ProxyResult<T> = Result<Json<T>, Response>;

fn public_message(err: &BackendError) -> String {
    match err {
        BackendError::Status { status } => format!("backend returned {status}"),
        BackendError::Unavailable(_) | BackendError::HttpClientBuild(_) => "backend unavailable".to_owned(),
        BackendError::Malformed(_) => "backend response malformed".to_owned(),
    }
}

/// Log `err` against operation `op` and build the `502` response.
pub fn backend_error_response(op: &'static str, err: &BackendError) -> Response {
    tracing::warn!(op, error = %err, "backend call failed");
    (StatusCode::BAD_GATEWAY, Json(ErrorBody { error: public_message(err) })).into_response()
}
