//! REST client for the career guidance API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! All paths are same-origin `/api/...`; the server forwards them to the
//! configured backend, so the browser never needs to know the backend origin.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified once here (network, authorization, HTTP status,
//! decode) so pages can show a message without re-deriving what went wrong.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Path prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api";

/// Errors produced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the credentials (401/403).
    #[error("not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Any other non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// Called outside the browser (server render or tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for rendering in place of page content.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Unauthorized { message, .. } if !message.is_empty() => message.clone(),
            Self::Unauthorized { .. } => "Your session is no longer valid. Please log in again.".to_owned(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed ({status})."),
            Self::Decode(_) => "Received an unexpected response from the server.".to_owned(),
            Self::Encode(_) => "Could not prepare the request.".to_owned(),
            Self::Unavailable => "Not available yet.".to_owned(),
        }
    }

    /// Whether re-authenticating could fix the failure.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// HTTP client carrying the bearer token of the active session, if any.
///
/// Cheap to clone; pages build one per request from the session handle so the
/// token is always the one current at call time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Value of the `Authorization` header, when a token is present.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(bearer)
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_query(path, &[]).await
    }

    /// `GET` a JSON document with query parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body does not decode.
    pub async fn get_query<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let body = self.execute(HttpMethod::Get, path, query, None).await?;
        decode(&body)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if encoding, the request, or decoding fails.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = encode(body)?;
        let body = self.execute(HttpMethod::Post, path, &[], Some(payload)).await?;
        decode(&body)
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if encoding, the request, or decoding fails.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = encode(body)?;
        let body = self.execute(HttpMethod::Put, path, &[], Some(payload)).await?;
        decode(&body)
    }

    /// `DELETE` a resource, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(HttpMethod::Delete, path, &[], None).await.map(drop)
    }

    /// `DELETE` with a JSON body (used by unsave).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if encoding or the request fails.
    pub async fn delete_with<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let payload = encode(body)?;
        self.execute(HttpMethod::Delete, path, &[], Some(payload)).await.map(drop)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = endpoint(path);
            let mut builder = match method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
                HttpMethod::Delete => Request::delete(&url),
            };
            if !query.is_empty() {
                builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
            }
            if let Some(authorization) = self.authorization() {
                builder = builder.header("Authorization", &authorization);
            }
            let sent = match body {
                Some(payload) => {
                    let request = builder
                        .header("Content-Type", "application/json")
                        .body(payload)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    request.send().await
                }
                None => builder.send().await,
            };
            let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            log::debug!("{} {url} -> {status}", method.as_str());
            check_status(status, &text)?;
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self, method, path, query, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// Normalize `path` to an absolute `/api/...` URL path.
#[must_use]
pub fn endpoint(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed == "api" || trimmed.starts_with("api/") {
        format!("/{trimmed}")
    } else {
        format!("{API_PREFIX}/{trimmed}")
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map an HTTP status + body into success or a classified error.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized { status, message: server_message(body) }),
        _ => Err(ApiError::Status { status, message: server_message(body) }),
    }
}

/// Extract the backend's `{ "message": "..." }` explanation, if present.
#[cfg(any(test, feature = "hydrate"))]
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_default()
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}
