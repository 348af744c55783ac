//! Dashboard routes: aggregate stats, activity log, and job triggers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use axum::Json;
use axum::extract::{Query, State};
use curator_client::net::types::{ActionMessage, DashboardStats, Job, LogsResponse};

use crate::routes::auth::AuthUser;
use crate::routes::proxy::{ProxyResult, backend_error_response};
use crate::services::backend::LogsQuery;
use crate::state::AppState;

/// `GET /api/stats`
pub async fn stats(State(state): State<AppState>, _auth: AuthUser) -> ProxyResult<DashboardStats> {
    let stats = state
        .backend
        .stats()
        .await
        .map_err(|e| backend_error_response("stats", &e))?;
    Ok(Json(stats))
}

/// `GET /api/logs?limit=`
pub async fn logs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<LogsQuery>,
) -> ProxyResult<LogsResponse> {
    let logs = state
        .backend
        .logs(query)
        .await
        .map_err(|e| backend_error_response("logs", &e))?;
    Ok(Json(logs))
}

async fn trigger(state: &AppState, job: Job) -> ProxyResult<ActionMessage> {
    let ack = state
        .backend
        .trigger(job)
        .await
        .map_err(|e| backend_error_response(job.path_segment(), &e))?;
    tracing::info!(job = job.path_segment(), "job triggered");
    Ok(Json(ack))
}

/// `POST /api/search`: start article discovery.
pub async fn trigger_search(State(state): State<AppState>, _auth: AuthUser) -> ProxyResult<ActionMessage> {
    trigger(&state, Job::Search).await
}

/// `POST /api/publish`: publish approved articles.
pub async fn trigger_publish(State(state): State<AppState>, _auth: AuthUser) -> ProxyResult<ActionMessage> {
    trigger(&state, Job::Publish).await
}
