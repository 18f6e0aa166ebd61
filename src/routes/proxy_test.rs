use std::time::Duration;

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderValue;
use axum::routing::any;

use super::*;
use crate::config::{Config, ProxyTimeouts};

fn state_for(origin: &str) -> AppState {
    let config = Config {
        port: 0,
        api_origin: origin.to_owned(),
        timeouts: ProxyTimeouts { request: Duration::from_secs(5), connect: Duration::from_secs(1) },
    };
    AppState::new(&config).unwrap()
}

async fn call(state: AppState, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap();
    forward(State(state), parts.method, parts.uri, parts.headers, Ok(body)).await
}

/// Backend stand-in that echoes what it received as JSON with status 418.
async fn spawn_echo_backend() -> String {
    async fn echo(request: Request) -> Response {
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, usize::MAX).await.unwrap();
        let echoed = serde_json::json!({
            "method": parts.method.as_str(),
            "uri": parts.uri.to_string(),
            "authorization": parts.headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            "cookie": parts.headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
            "body": String::from_utf8_lossy(&body),
        });
        (StatusCode::IM_A_TEAPOT, [("x-backend", "echo")], axum::Json(echoed)).into_response()
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/{*rest}", any(echo))).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================
// helpers
// =============================================================

#[test]
fn upstream_url_joins_origin_and_path() {
    assert_eq!(upstream_url("http://localhost:5000", "/api/careers?sortBy=salary"), "http://localhost:5000/api/careers?sortBy=salary");
    assert_eq!(upstream_url("http://localhost:5000/", "/api/users"), "http://localhost:5000/api/users");
    assert_eq!(upstream_url("http://backend", "api/users"), "http://backend/api/users");
}

#[test]
fn request_headers_keep_only_allowlist() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t1"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("learnx.local"));

    let forwarded = forwarded_request_headers(&incoming);

    assert_eq!(forwarded.len(), 2);
    assert_eq!(forwarded[header::AUTHORIZATION], "Bearer t1");
    assert_eq!(forwarded[header::CONTENT_TYPE], "application/json");
}

#[test]
fn response_headers_drop_hop_by_hop() {
    let mut upstream = HeaderMap::new();
    upstream.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    upstream.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    upstream.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    upstream.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

    let returned = returned_response_headers(&upstream);

    assert_eq!(returned.len(), 3);
    assert_eq!(returned.get_all(header::SET_COOKIE).iter().count(), 2);
    assert!(returned.get(header::TRANSFER_ENCODING).is_none());
}

#[test]
fn errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout(String::new()).status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable(String::new()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::ResponseBody(String::new()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::RequestBody(String::new()).status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    // No DefaultBodyLimit layer here, so axum's 2 MiB default applies.
    let request = Request::builder().uri("/api/users").body(Body::from(vec![b'x'; 3 * 1024 * 1024])).unwrap();

    let rejection = Bytes::from_request(request, &()).await.unwrap_err();
    let err = ProxyError::from(rejection);

    assert!(matches!(err, ProxyError::BodyTooLarge), "{err:?}");
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn body_within_configured_limit_reaches_backend() {
    let origin = spawn_echo_backend().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = crate::routes::api_routes(state_for(&origin));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = reqwest::Client::new();

    // Larger than axum's 2 MiB default, within MAX_BODY_BYTES.
    let response =
        client.post(format!("http://{addr}/api/upload")).body(vec![b'x'; 3 * 1024 * 1024]).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    let echoed: serde_json::Value = response.json().await.unwrap();
    assert_eq!(echoed["body"].as_str().map(str::len), Some(3 * 1024 * 1024));
}

// =============================================================
// forward
// =============================================================

#[tokio::test]
async fn forward_relays_request_and_upstream_response() {
    let origin = spawn_echo_backend().await;
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/submissions/s1?x=1")
        .header(header::AUTHORIZATION, "Bearer t1")
        .header(header::COOKIE, "sid=secret")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status":"Resolved"}"#))
        .unwrap();

    let response = call(state_for(&origin), request).await.unwrap();

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(response.headers()["x-backend"], "echo");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let echoed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["uri"], "/api/submissions/s1?x=1");
    assert_eq!(echoed["authorization"], "Bearer t1");
    assert_eq!(echoed["cookie"], serde_json::Value::Null);
    assert_eq!(echoed["body"], r#"{"status":"Resolved"}"#);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_message() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let request = Request::builder().uri("/api/users").body(Body::empty()).unwrap();

    let err = call(state_for(&origin), request).await.unwrap_err();
    assert!(matches!(err, ProxyError::Unreachable(_)), "{err:?}");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
}
