//! Article review routes, proxied to the backend of record.

#[cfg(test)]
#[path = "articles_test.rs"]
mod tests;

use axum::extract::{Path, Query, State};
use curator_client::net::types::{ActionMessage, ArticleAction, ArticlesResponse};

use crate::routes::auth::AuthUser;
use crate::routes::proxy::{ProxyResult, backend_error_response};
use crate::services::backend::ArticlesQuery;
use crate::state::AppState;

/// `GET /api/articles?status=&limit=`: list articles.
pub async fn list_articles(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ArticlesQuery>,
) -> ProxyResult<ArticlesResponse> {
    let resp = state
        .backend
        .list_articles(&query)
        .await
        .map_err(|e| backend_error_response("list_articles", &e))?;
    Ok(axum::Json(resp))
}

async fn decide(state: &AppState, article_id: i64, action: ArticleAction) -> ProxyResult<ActionMessage> {
    let resp = state
        .backend
        .decide_article(article_id, action)
        .await
        .map_err(|e| backend_error_response(action.path_segment(), &e))?;
    tracing::info!(article_id, action = action.path_segment(), "article decided");
    Ok(axum::Json(resp))
}

/// `POST /api/articles/{id}/approve`
pub async fn approve_article(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(article_id): Path<i64>,
) -> ProxyResult<ActionMessage> {
    decide(&state, article_id, ArticleAction::Approve).await
}

/// `POST /api/articles/{id}/reject`
pub async fn reject_article(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(article_id): Path<i64>,
) -> ProxyResult<ActionMessage> {
    decide(&state, article_id, ArticleAction::Reject).await
}
