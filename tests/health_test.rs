mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_welcomes() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app.oneshot(common::get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Welcome to Hybreed.ai backend!");
}

#[tokio::test]
async fn test_health_reports_version() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app.oneshot(common::get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["git_version"], hybreed::version::GIT_VERSION);
}
