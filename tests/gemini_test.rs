use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use hybreed::ai::{GeminiClient, GenerationError, PlanGenerator};
use hybreed::config::GeminiConfig;

/// Serves canned provider replies on an ephemeral port and returns its base URL.
async fn spawn_provider() -> String {
    let app = Router::new()
        .route(
            "/ok",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                Json(json!({
                    "candidates": [1],
                    "prompt": body["contents"][0]["parts"][0]["text"],
                    "authorization": headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok()),
                }))
            }),
        )
        .route(
            "/forbidden",
            post(|| async { (StatusCode::FORBIDDEN, "API key not valid") }),
        )
        .route(
            "/created",
            post(|| async { (StatusCode::CREATED, Json(json!({ "x": 1 }))) }),
        )
        .route(
            "/unavailable",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/garbled", post(|| async { "not json" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn client(endpoint: String) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        api_key: Some("test-key".to_string()),
        endpoint,
    })
}

#[tokio::test]
async fn test_ok_response_is_returned_verbatim() {
    let base = spawn_provider().await;

    let payload = client(format!("{base}/ok"))
        .generate_plan("30 minute beginner plan")
        .await
        .unwrap();

    assert_eq!(
        payload,
        json!({
            "candidates": [1],
            "prompt": "30 minute beginner plan",
            "authorization": "Bearer test-key",
        })
    );
}

#[tokio::test]
async fn test_error_status_forwards_raw_text() {
    let base = spawn_provider().await;

    let err = client(format!("{base}/forbidden"))
        .generate_plan("plan")
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError("API key not valid".to_string()));
}

#[tokio::test]
async fn test_non_200_success_status_is_an_error() {
    let base = spawn_provider().await;

    let err = client(format!("{base}/created"))
        .generate_plan("plan")
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError(r#"{"x":1}"#.to_string()));
}

#[tokio::test]
async fn test_empty_error_body_reports_status() {
    let base = spawn_provider().await;

    let err = client(format!("{base}/unavailable"))
        .generate_plan("plan")
        .await
        .unwrap_err();

    assert!(err.0.starts_with("Gemini returned 503"), "{}", err.0);
}

#[tokio::test]
async fn test_unparseable_ok_body_is_an_error() {
    let base = spawn_provider().await;

    let err = client(format!("{base}/garbled"))
        .generate_plan("plan")
        .await
        .unwrap_err();

    assert!(err.0.starts_with("Failed to parse response"), "{}", err.0);
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/generate"))
        .generate_plan("plan")
        .await
        .unwrap_err();

    assert!(err.0.starts_with("Failed to send request"), "{}", err.0);
}
