//! Pipeline settings routes, proxied to the backend of record.

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

use axum::Json;
use axum::extract::State;
use curator_client::net::types::{ActionMessage, Settings};

use crate::routes::auth::AuthUser;
use crate::routes::proxy::{ProxyResult, backend_error_response};
use crate::state::AppState;

/// `GET /api/settings`
pub async fn get_settings(State(state): State<AppState>, _auth: AuthUser) -> ProxyResult<Settings> {
    let settings = state
        .backend
        .settings()
        .await
        .map_err(|e| backend_error_response("get_settings", &e))?;
    Ok(Json(settings))
}

/// `POST /api/settings`: overwrite the whole record.
pub async fn save_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(settings): Json<Settings>,
) -> ProxyResult<ActionMessage> {
    let ack = state
        .backend
        .save_settings(&settings)
        .await
        .map_err(|e| backend_error_response("save_settings", &e))?;
    tracing::info!("settings saved");
    Ok(Json(ack))
}
