use super::*;

#[test]
fn articles_endpoint_without_params() {
    assert_eq!(articles_endpoint(None, None), "/api/articles");
}

#[test]
fn articles_endpoint_with_filter() {
    assert_eq!(articles_endpoint(Some(StatusFilter::All), None), "/api/articles?status=all");
    assert_eq!(
        articles_endpoint(Some(StatusFilter::Pending), None),
        "/api/articles?status=pending"
    );
}

#[test]
fn articles_endpoint_with_limit_only() {
    assert_eq!(articles_endpoint(None, Some(5)), "/api/articles?limit=5");
}

#[test]
fn articles_endpoint_with_filter_and_limit() {
    assert_eq!(
        articles_endpoint(Some(StatusFilter::Published), Some(20)),
        "/api/articles?status=published&limit=20"
    );
}

#[test]
fn article_action_endpoint_formats_expected_path() {
    assert_eq!(article_action_endpoint(7, ArticleAction::Approve), "/api/articles/7/approve");
    assert_eq!(article_action_endpoint(7, ArticleAction::Reject), "/api/articles/7/reject");
}

#[test]
fn logs_endpoint_includes_limit() {
    assert_eq!(logs_endpoint(10), "/api/logs?limit=10");
}

#[test]
fn job_endpoint_formats_expected_path() {
    assert_eq!(job_endpoint(Job::Search), "/api/search");
    assert_eq!(job_endpoint(Job::Publish), "/api/publish");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("stats fetch", 502), "stats fetch failed: 502");
}
