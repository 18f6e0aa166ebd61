//! Session store: the single holder of the signed-in user.
//!
//! DESIGN
//! ======
//! The store owns the active [`Session`] and the durable backend it is
//! mirrored to. Every mutation writes the store and the backend together, so
//! a reload via [`SessionStore::restore`] always observes the last committed
//! session. Tokens are opaque and never inspected; a stale token is only
//! discovered when a request using it fails.
//!
//! Storage problems degrade to the anonymous state instead of surfacing as
//! errors: unreadable or malformed entries are treated as "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::net::api::ApiError;
use crate::util::storage::KeyValueStore;

/// Storage key the session is persisted under.
pub const SESSION_KEY: &str = "userInfo";

/// Field that `update` never overwrites.
const TOKEN_FIELD: &str = "token";

/// The signed-in user as returned by the login/register endpoints.
///
/// The payload is held verbatim, so the persisted copy is exactly what the
/// backend sent. Construction checks the few fields the client reads: a
/// string `token`, and `name`, `email`, `_id`, `isAdmin` of the right type
/// when present (`null` counts as absent).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Session {
    payload: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Session {
    type Error = String;

    fn try_from(payload: Map<String, Value>) -> Result<Self, Self::Error> {
        if !payload.get(TOKEN_FIELD).is_some_and(Value::is_string) {
            return Err("missing field `token`".to_owned());
        }
        for key in ["_id", "name", "email"] {
            if payload.get(key).is_some_and(|v| !v.is_null() && !v.is_string()) {
                return Err(format!("`{key}` must be a string"));
            }
        }
        if payload.get("isAdmin").is_some_and(|v| !v.is_null() && !v.is_boolean()) {
            return Err("`isAdmin` must be a boolean".to_owned());
        }
        Ok(Self { payload })
    }
}

impl From<Session> for Map<String, Value> {
    fn from(session: Session) -> Self {
        session.payload
    }
}

impl Session {
    fn text(&self, key: &str) -> &str {
        self.payload.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// Opaque bearer credential.
    #[must_use]
    pub fn token(&self) -> &str {
        self.text(TOKEN_FIELD)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.text("_id")
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.text("name")
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.text("email")
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.payload.get("isAdmin").and_then(Value::as_bool).unwrap_or_default()
    }

    /// First word of the display name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name().split_whitespace().next().unwrap_or_default()
    }

    /// A nested profile object such as `personalInfo`, if present.
    #[must_use]
    pub fn profile_section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.payload.get(key).and_then(Value::as_object)
    }

    /// The payload as received, with any merged updates.
    #[must_use]
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

/// Credentials submitted from the login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

impl AuthRequest {
    /// Backend path the request is posted to.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login { .. } => "/users/login",
            Self::Register { .. } => "/users/register",
        }
    }

    /// JSON body for the request.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Login { email, password } => serde_json::json!({ "email": email, "password": password }),
            Self::Register { name, email, password } => {
                serde_json::json!({ "name": name, "email": email, "password": password })
            }
        }
    }
}

/// Exchanges credentials for a session. Implemented by the API client; tests
/// substitute fakes.
pub trait Authenticator {
    fn authenticate(&self, request: &AuthRequest) -> impl Future<Output = Result<Session, ApiError>>;
}

/// Errors from [`SessionStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no active session")]
    NoSession,
    #[error("merged session is invalid: {0}")]
    Invalid(String),
}

/// Holder of the active session, mirrored to a durable [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    active: Option<Session>,
    restored: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an anonymous store that has not yet read `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage, active: None, restored: false }
    }

    /// Adopt any persisted session as the active one.
    ///
    /// A missing entry yields the anonymous state. A malformed entry is
    /// discarded (and removed from storage) rather than reported.
    pub fn restore(&mut self) -> Option<&Session> {
        self.restored = true;
        self.active = match self.storage.read(SESSION_KEY) {
            None => None,
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("discarding unreadable persisted session: {e}");
                    self.storage.remove(SESSION_KEY);
                    None
                }
            },
        };
        self.active.as_ref()
    }

    /// Authenticate through `authenticator` and make the result active.
    ///
    /// On failure the active session and storage are left untouched.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's [`ApiError`] unchanged.
    pub async fn login<A: Authenticator>(&mut self, authenticator: &A, request: &AuthRequest) -> Result<Session, ApiError> {
        let session = authenticator.authenticate(request).await?;
        self.establish(session.clone());
        Ok(session)
    }

    /// Set `session` as active and persist it.
    pub fn establish(&mut self, session: Session) {
        self.persist(&session);
        self.active = Some(session);
        self.restored = true;
    }

    /// Clear the active session and its persisted copy.
    pub fn logout(&mut self) {
        self.active = None;
        self.storage.remove(SESSION_KEY);
    }

    /// Merge `fields` into the active session, keeping its token, and persist.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSession`] when anonymous, or
    /// [`SessionError::Invalid`] when the merged record no longer parses
    /// (the session is left unchanged in that case).
    pub fn update(&mut self, fields: Map<String, Value>) -> Result<&Session, SessionError> {
        let current = self.active.as_ref().ok_or(SessionError::NoSession)?;
        let mut merged = current.payload().clone();
        for (key, value) in fields {
            if key != TOKEN_FIELD {
                merged.insert(key, value);
            }
        }
        let next = Session::try_from(merged).map_err(SessionError::Invalid)?;
        self.persist(&next);
        Ok(self.active.insert(next))
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.active.as_ref().map(Session::token)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.active.as_ref().is_some_and(Session::is_admin)
    }

    /// Whether [`restore`](Self::restore) has run (or a login happened).
    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    fn persist(&self, session: &Session) {
        let persisted = match serde_json::to_string(session) {
            Ok(raw) => self.storage.write(SESSION_KEY, &raw),
            Err(e) => {
                log::error!("session serialize failed: {e}");
                false
            }
        };
        if !persisted {
            log::warn!("session not persisted; it will not survive a reload");
        }
    }
}
