//! Server configuration parsed from the environment.
//!
//! Every value has a default so a bare `cargo leptos watch` works against a
//! backend on `localhost:5000`. `main` loads `.env` first, so a file in the
//! working directory can override the defaults without exporting anything.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("API_ORIGIN must be an http(s) origin, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend origin without a trailing slash, e.g. `http://localhost:5000`.
    pub api_origin: String,
    pub timeouts: ProxyTimeouts,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `API_ORIGIN`: backend origin, default `http://localhost:5000`
    /// - `API_TIMEOUT_SECS`: whole-request timeout, default 30
    /// - `API_CONNECT_TIMEOUT_SECS`: connect timeout, default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let api_origin = parse_origin(lookup("API_ORIGIN").as_deref())?;
        let timeouts = ProxyTimeouts {
            request: Duration::from_secs(parse_number(&lookup, "API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?),
            connect: Duration::from_secs(parse_number(
                &lookup,
                "API_CONNECT_TIMEOUT_SECS",
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?),
        };
        Ok(Self { port, api_origin, timeouts })
    }
}

fn parse_number<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(raw) = lookup(var).filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn parse_origin(raw: Option<&str>) -> Result<String, ConfigError> {
    let origin = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_ORIGIN);
    let origin = origin.trim_end_matches('/');
    let host = origin.strip_prefix("http://").or_else(|| origin.strip_prefix("https://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains('/') => Ok(origin.to_owned()),
        _ => Err(ConfigError::InvalidOrigin(origin.to_owned())),
    }
}
