//! Reactive session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`SessionHandle`] and provides it; pages, the sidebar,
//! and route guards read it with `expect_context`. Reads are tracked so views
//! re-render on login, logout, and profile updates. Writes replace the whole
//! store in a single assignment.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::net::api::{ApiClient, ApiError};
use crate::state::session::{AuthRequest, Authenticator, Session, SessionError, SessionStore};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Session store backed by browser `localStorage`.
pub type BrowserSessionStore = SessionStore<LocalStorage>;

/// Copyable handle over the application's session store.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    store: RwSignal<BrowserSessionStore>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { store: RwSignal::new(SessionStore::new(LocalStorage)) }
    }

    /// Load any persisted session. Runs once after hydration.
    pub fn restore(self) {
        self.store.update(|store| {
            if let Some(session) = store.restore() {
                log::info!("restored session for {}", session.email());
            }
        });
    }

    /// Authenticate against the backend and adopt the returned session.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from the login/register call; the current
    /// session is left as it was.
    pub async fn login(self, request: AuthRequest) -> Result<Session, ApiError> {
        self.login_with(&ApiClient::anonymous(), &request).await
    }

    /// [`login`](Self::login) against any [`Authenticator`].
    ///
    /// The result is applied to the live store once the call returns, so
    /// changes made while it was in flight are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's [`ApiError`]; the store is not touched.
    pub async fn login_with<A: Authenticator>(self, authenticator: &A, request: &AuthRequest) -> Result<Session, ApiError> {
        let session = authenticator.authenticate(request).await?;
        log::info!("signed in as {}", session.email());
        self.store.update(|store| store.establish(session.clone()));
        Ok(session)
    }

    pub fn logout(self) {
        self.store.update(SessionStore::logout);
    }

    /// Merge profile fields into the session (token preserved).
    ///
    /// # Errors
    ///
    /// See [`SessionStore::update`].
    pub fn update(self, fields: Map<String, Value>) -> Result<(), SessionError> {
        let mut outcome = Ok(());
        self.store.update(|store| {
            outcome = store.update(fields).map(drop);
        });
        outcome
    }

    /// Current session (tracked).
    pub fn session(self) -> Option<Session> {
        self.store.with(|store| store.current().cloned())
    }

    /// Current session, without subscribing.
    pub fn session_untracked(self) -> Option<Session> {
        self.store.with_untracked(|store| store.current().cloned())
    }

    pub fn is_admin(self) -> bool {
        self.store.with(SessionStore::is_admin)
    }

    pub fn is_restored(self) -> bool {
        self.store.with(SessionStore::is_restored)
    }

    /// API client carrying the current token (tracked).
    pub fn client(self) -> ApiClient {
        self.store.with(client_for)
    }

    /// API client for the signed-in user, or `None` when anonymous (tracked).
    ///
    /// Fetch closures return early on `None` so nothing is requested before
    /// the session is restored.
    pub fn signed_in_client(self) -> Option<ApiClient> {
        self.store.with(|store| store.token().map(ApiClient::with_token))
    }

    /// API client carrying the current token, without subscribing.
    pub fn client_untracked(self) -> ApiClient {
        self.store.with_untracked(client_for)
    }

    /// Route-guard verdict for the current state (tracked).
    pub fn access(self, requirement: Access) -> AccessDecision {
        self.store.with(|store| decide_access(store, requirement))
    }
}

fn client_for<S: KeyValueStore>(store: &SessionStore<S>) -> ApiClient {
    store.token().map_or_else(ApiClient::anonymous, ApiClient::with_token)
}

/// What a route needs from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in user.
    SignedIn,
    /// A signed-in administrator.
    Admin,
}

/// Outcome of checking a route requirement against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Persisted state has not been read yet; render a placeholder.
    Pending,
    Granted,
    /// Redirect to this path.
    Redirect(&'static str),
}

/// Decide whether the current session satisfies `requirement`.
///
/// Anonymous users go to `/login`; signed-in non-admins hitting an admin route
/// go back to `/dashboard`.
pub fn decide_access<S: KeyValueStore>(store: &SessionStore<S>, requirement: Access) -> AccessDecision {
    if requirement == Access::Public {
        return AccessDecision::Granted;
    }
    if !store.is_restored() {
        return AccessDecision::Pending;
    }
    match (store.current(), requirement) {
        (None, _) => AccessDecision::Redirect("/login"),
        (Some(session), Access::Admin) if !session.is_admin() => AccessDecision::Redirect("/dashboard"),
        _ => AccessDecision::Granted,
    }
}
