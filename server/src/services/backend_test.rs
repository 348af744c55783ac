use super::*;
use crate::config::BackendTimeouts;
use curator_client::net::types::{ArticleStatus, LogStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&BackendConfig {
        base_url: server.uri(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 1 },
    })
    .unwrap()
}

fn article_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Статья {id}"),
        "url": "https://example.by/a",
        "content": "Текст",
        "source": "example.by",
        "keywords": ["энергоаудит"],
        "ai_score": 8.1,
        "relevance_score": 7.2,
        "found_date": "2026-10-01 09:15:00",
        "status": status
    })
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let backend = HttpBackend::new(&BackendConfig {
        base_url: "http://localhost:3001/".to_owned(),
        timeouts: BackendTimeouts { request_secs: 1, connect_secs: 1 },
    })
    .unwrap();
    assert_eq!(backend.base_url(), "http://localhost:3001");
}

// =============================================================================
// success paths
// =============================================================================

#[tokio::test]
async fn list_articles_forwards_status_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("status", "pending"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [article_json(3, "pending")] })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ArticlesQuery { status: Some("pending".to_owned()), limit: Some(5) };
    let resp = backend_for(&server).list_articles(&query).await.unwrap();
    assert_eq!(resp.articles.len(), 1);
    assert_eq!(resp.articles[0].status, ArticleStatus::Pending);
}

#[tokio::test]
async fn list_articles_without_query_sends_no_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .mount(&server)
        .await;

    let resp = backend_for(&server)
        .list_articles(&ArticlesQuery::default())
        .await
        .unwrap();
    assert!(resp.articles.is_empty());
    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn decide_article_posts_to_action_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles/42/reject"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Статья отклонена" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let msg = backend_for(&server)
        .decide_article(42, ArticleAction::Reject)
        .await
        .unwrap();
    assert_eq!(msg.success, Some(true));
    assert_eq!(msg.message.as_deref(), Some("Статья отклонена"));
}

#[tokio::test]
async fn stats_and_logs_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_articles": 10, "pending_articles": 3, "published_articles": 5, "avg_score": 7.25
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logs": [{
            "id": 1, "action": "wordpress", "message": "Опубликовано в wordpress: 12",
            "timestamp": "2026-10-02 10:00:00", "status": "success"
        }]})))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let stats = backend.stats().await.unwrap();
    assert_eq!(stats.total_articles, 10);
    let logs = backend.logs(LogsQuery { limit: Some(10) }).await.unwrap();
    assert_eq!(logs.logs[0].status, LogStatus::Success);
}

#[tokio::test]
async fn save_settings_posts_whole_record() {
    let server = MockServer::start().await;
    let settings = Settings { search_hour: 6, min_article_score: 8.5, ..Settings::default() };
    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(body_json(&settings))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Настройки обновлены" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let msg = backend_for(&server).save_settings(&settings).await.unwrap();
    assert_eq!(msg.message.as_deref(), Some("Настройки обновлены"));
}

#[tokio::test]
async fn trigger_posts_job_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Публикация в блог запущена" })))
        .expect(1)
        .mount(&server)
        .await;

    let msg = backend_for(&server).trigger(Job::Publish).await.unwrap();
    assert_eq!(msg.success, None);
}

// =============================================================================
// failures
// =============================================================================

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "db locked" })))
        .mount(&server)
        .await;

    let err = backend_for(&server).stats().await.unwrap_err();
    assert_eq!(err, BackendError::Status { status: 500 });
    assert_eq!(err.to_string(), "backend returned 500");
}

#[tokio::test]
async fn undecodable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).settings().await.unwrap_err();
    assert!(matches!(err, BackendError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_backend_is_unavailable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let backend = HttpBackend::new(&BackendConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeouts: BackendTimeouts { request_secs: 2, connect_secs: 1 },
    })
    .unwrap();
    let err = backend.stats().await.unwrap_err();
    assert!(matches!(err, BackendError::Unavailable(_)));
}

#[tokio::test]
async fn slow_backend_times_out_as_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&BackendConfig {
        base_url: server.uri(),
        timeouts: BackendTimeouts { request_secs: 1, connect_secs: 1 },
    })
    .unwrap();
    let err = backend.stats().await.unwrap_err();
    assert!(matches!(err, BackendError::Unavailable(_)));
}
