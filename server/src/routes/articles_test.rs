use super::*;
use axum::http::StatusCode;
use curator_client::net::types::ArticleStatus;

use crate::services::backend::BackendError;
use crate::state::test_helpers::{MockBackend, operator, test_app_state, test_app_state_with};

fn query(status: Option<&str>, limit: Option<u32>) -> Query<ArticlesQuery> {
    Query(ArticlesQuery { status: status.map(str::to_owned), limit })
}

#[tokio::test]
async fn list_forwards_status_and_limit() {
    let (state, backend) = test_app_state();
    let auth = operator(&state);
    let axum::Json(body) = list_articles(State(state), auth, query(Some("pending"), Some(1)))
        .await
        .unwrap();
    assert_eq!(body.articles.len(), 1);
    assert_eq!(body.articles[0].status, ArticleStatus::Pending);
    assert_eq!(backend.calls.lock().unwrap().as_slice(), ["articles status=pending limit=1"]);
}

#[tokio::test]
async fn list_without_query_forwards_nothing() {
    let (state, backend) = test_app_state();
    let auth = operator(&state);
    let axum::Json(body) = list_articles(State(state), auth, query(None, None)).await.unwrap();
    assert_eq!(body.articles.len(), 3);
    assert_eq!(backend.calls.lock().unwrap().as_slice(), ["articles status=- limit=-"]);
}

#[tokio::test]
async fn approved_article_leaves_pending_list() {
    let (state, _) = test_app_state();
    let auth = operator(&state);
    let axum::Json(ack) = approve_article(State(state.clone()), auth, Path(1)).await.unwrap();
    assert_eq!(ack.success, Some(true));

    let auth = operator(&state);
    let axum::Json(body) = list_articles(State(state), auth, query(Some("pending"), None)).await.unwrap();
    let ids: Vec<i64> = body.articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3]);
}

#[tokio::test]
async fn reject_is_forwarded() {
    let (state, backend) = test_app_state();
    let auth = operator(&state);
    reject_article(State(state), auth, Path(3)).await.unwrap();
    assert_eq!(backend.calls.lock().unwrap().as_slice(), ["reject 3"]);
    assert_eq!(backend.articles.lock().unwrap()[2].status, ArticleStatus::Rejected);
}

#[tokio::test]
async fn unknown_article_maps_to_bad_gateway() {
    let (state, _) = test_app_state();
    let auth = operator(&state);
    let resp = approve_article(State(state), auth, Path(99)).await.unwrap_err();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let backend = std::sync::Arc::new(MockBackend::failing(BackendError::Unavailable("refused".to_owned())));
    let state = test_app_state_with(backend);
    let auth = operator(&state);
    let resp = list_articles(State(state), auth, query(None, None)).await.unwrap_err();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
