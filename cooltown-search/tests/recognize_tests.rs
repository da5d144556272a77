//! Integration tests for the recognition endpoint
//!
//! The external recognition API is replaced by a stub axum server bound to
//! an ephemeral port; it records each request and replies with a canned
//! status and body.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use cooltown_search::services::{RecognitionClient, RecognitionConfig};
use cooltown_search::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

#[derive(Clone)]
struct StubApi {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn stub_recognize(State(stub): State<StubApi>, Json(body): Json<Value>) -> (StatusCode, String) {
    stub.received.lock().unwrap().push(body);
    (stub.status, stub.body.clone())
}

/// Start a stub recognition API, returning its URL and request log
async fn spawn_stub_api(status: StatusCode, body: &str) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let stub = StubApi {
        status,
        body: body.to_string(),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/recognize", post(stub_recognize))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/recognize", addr), received)
}

fn search_app(api_url: &str) -> Router {
    let recognizer = RecognitionClient::new(RecognitionConfig {
        api_url: api_url.to_string(),
        api_token: "test-token".to_string(),
    })
    .unwrap();
    build_router(AppState::new(recognizer))
}

fn recognize_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/recognize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn test_success_returns_title_as_id() {
    let (url, received) = spawn_stub_api(
        StatusCode::OK,
        r#"{"status":"success","result":{"artist":"Someone","title":"My Song"}}"#,
    )
    .await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"audio": "ZnJhZ21lbnQ="})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": "My Song"}));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0],
        json!({"api_token": "test-token", "audio": "ZnJhZ21lbnQ="})
    );
}

#[tokio::test]
async fn test_capitalized_audio_field_is_accepted() {
    let (url, received) = spawn_stub_api(
        StatusCode::OK,
        r#"{"status":"success","result":{"title":"My Song"}}"#,
    )
    .await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"Audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(received.lock().unwrap()[0]["audio"], "x");
}

#[tokio::test]
async fn test_missing_audio_never_calls_api() {
    let (url, received) = spawn_stub_api(StatusCode::OK, "{}").await;
    let app = search_app(&url);

    for body in [json!({}), json!({"audio": ""}), json!({"Audio": "", "audio": ""})] {
        let response = app.clone().oneshot(recognize_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let request = Request::builder()
        .method("POST")
        .uri("/recognize")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_error_status_is_recognition_failure() {
    let (url, _received) = spawn_stub_api(
        StatusCode::OK,
        r#"{"status":"error","error":{"error_code":900,"error_message":"Wrong API token"}}"#,
    )
    .await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "RECOGNITION_FAILED");
    assert_eq!(body["error"]["message"], "recognition failed");
    assert!(!body.to_string().contains("Wrong API token"));
}

#[tokio::test]
async fn test_no_match_is_recognition_failure() {
    let (url, _received) = spawn_stub_api(StatusCode::OK, r#"{"status":"success","result":null}"#).await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "RECOGNITION_FAILED");
    assert_eq!(body["error"]["message"], "recognition failed");
}

#[tokio::test]
async fn test_non_200_is_upstream_unavailable() {
    let (url, _received) = spawn_stub_api(StatusCode::SERVICE_UNAVAILABLE, "busy").await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"]["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn test_unreachable_api_is_upstream_unavailable() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = search_app(&format!("http://{}/recognize", addr))
        .oneshot(recognize_request(json!({"audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_garbage_body_is_protocol_error() {
    let (url, _received) = spawn_stub_api(StatusCode::OK, "<html>maintenance</html>").await;

    let response = search_app(&url)
        .oneshot(recognize_request(json!({"audio": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"]["code"], "PROTOCOL_ERROR");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = search_app("http://127.0.0.1:9/recognize");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["module"], "cooltown-search");
}
