use super::*;
use axum::body::to_bytes;

async fn error_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice::<ErrorBody>(&bytes).unwrap().error
}

#[tokio::test]
async fn status_error_names_backend_status() {
    let resp = backend_error_response("stats", &BackendError::Status { status: 500 });
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error_text(resp).await, "backend returned 500");
}

#[tokio::test]
async fn transport_errors_hide_detail() {
    let resp = backend_error_response("stats", &BackendError::Unavailable("connection refused 127.0.0.1".to_owned()));
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error_text(resp).await, "backend unavailable");

    let resp = backend_error_response("stats", &BackendError::HttpClientBuild("tls".to_owned()));
    assert_eq!(error_text(resp).await, "backend unavailable");
}

#[tokio::test]
async fn malformed_body_is_reported_as_such() {
    let resp = backend_error_response("logs", &BackendError::Malformed("expected value at line 1".to_owned()));
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error_text(resp).await, "backend response malformed");
}
