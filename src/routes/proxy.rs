//! Reverse proxy for `/api/*`.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this server, so the backend origin is a
//! single server-side setting. Requests are forwarded with their method,
//! path, query, body, and an allowlist of headers; the upstream status and
//! body come back unchanged. Transport failures become JSON errors shaped
//! like the backend's own (`{"message": ...}`) so the client's error
//! classification handles both the same way.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream. Applied as the router's
/// `DefaultBodyLimit`.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Request headers passed through to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

/// Response headers that describe this hop rather than the payload.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

/// Failures forwarding a request, each mapped to a gateway-style response.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    BodyTooLarge,

    #[error("request body unreadable: {0}")]
    RequestBody(String),

    #[error("backend timed out: {0}")]
    Timeout(String),

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend response unreadable: {0}")]
    ResponseBody(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout(err.to_string()) } else { Self::Unreachable(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::ResponseBody(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the user; transport details stay in the log.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::BodyTooLarge => "The request body is too large.",
            Self::RequestBody(_) => "The request could not be read.",
            Self::Timeout(_) => "The server took too long to respond. Please try again.",
            Self::Unreachable(_) | Self::ResponseBody(_) => "The server is unavailable right now. Please try again later.",
        }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        match rejection {
            BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => Self::BodyTooLarge,
            other => Self::RequestBody(other.body_text()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        let body = serde_json::json!({ "message": self.public_message() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Join the backend origin with the incoming `/api/...` path and query.
#[must_use]
pub fn upstream_url(origin: &str, path_and_query: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{origin}{path_and_query}")
    } else {
        format!("{origin}/{path_and_query}")
    }
}

/// Subset of `incoming` forwarded to the backend.
#[must_use]
pub fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Upstream response headers minus hop-by-hop ones.
#[must_use]
pub fn returned_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in upstream {
        if !HOP_BY_HOP.contains(&name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*rest}`: forward to the backend and relay its answer.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.api_origin, path_and_query);
    let body = body?;

    tracing::debug!(%method, %url, "proxying");
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_request_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::from_reqwest(&e))?;

    let status = upstream.status();
    let headers = returned_response_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::ResponseBody(e.to_string()))?;
    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
