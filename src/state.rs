//! Shared application state.
//!
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It holds one pooled HTTP client for the backend and the origin requests
//! are forwarded to.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_origin: Arc<str>,
}

impl AppState {
    /// Build the shared backend client from `config`.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error when the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request)
            .connect_timeout(config.timeouts.connect)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_origin: Arc::from(config.api_origin.as_str()) })
    }
}
