use super::*;
use crate::util::storage::MemoryStore;

fn signed_in(is_admin: bool) -> SessionStore<MemoryStore> {
    let mut store = SessionStore::new(MemoryStore::new());
    store.establish(serde_json::from_value(serde_json::json!({ "name": "A", "isAdmin": is_admin, "token": "t1" })).unwrap());
    store
}

#[test]
fn public_routes_are_always_granted() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(decide_access(&store, Access::Public), AccessDecision::Granted);
}

#[test]
fn guarded_routes_wait_until_restored() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(decide_access(&store, Access::SignedIn), AccessDecision::Pending);
    assert_eq!(decide_access(&store, Access::Admin), AccessDecision::Pending);
}

#[test]
fn anonymous_user_is_sent_to_login() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.restore();
    assert_eq!(decide_access(&store, Access::SignedIn), AccessDecision::Redirect("/login"));
    assert_eq!(decide_access(&store, Access::Admin), AccessDecision::Redirect("/login"));
}

#[test]
fn non_admin_is_sent_back_from_admin_routes() {
    let store = signed_in(false);
    assert_eq!(decide_access(&store, Access::SignedIn), AccessDecision::Granted);
    assert_eq!(decide_access(&store, Access::Admin), AccessDecision::Redirect("/dashboard"));
}

#[test]
fn admin_is_granted_everywhere() {
    let store = signed_in(true);
    assert_eq!(decide_access(&store, Access::Admin), AccessDecision::Granted);
}

#[test]
fn client_carries_session_token() {
    assert_eq!(client_for(&signed_in(false)).authorization().as_deref(), Some("Bearer t1"));

    let mut anonymous = signed_in(false);
    anonymous.logout();
    assert_eq!(client_for(&anonymous), ApiClient::anonymous());
}

// =============================================================
// SessionHandle::login_with
// =============================================================

struct CannedAuth {
    result: Result<Session, ApiError>,
    during: Option<SessionHandle>,
}

impl Authenticator for CannedAuth {
    async fn authenticate(&self, _request: &AuthRequest) -> Result<Session, ApiError> {
        if let Some(handle) = self.during {
            handle.restore();
        }
        self.result.clone()
    }
}

fn login_request() -> AuthRequest {
    AuthRequest::Login { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn session(token: &str) -> Session {
    serde_json::from_value(serde_json::json!({ "name": "A", "email": "a@b.com", "token": token })).unwrap()
}

#[test]
fn handle_login_applies_result_after_concurrent_restore() {
    let handle = SessionHandle::new();
    let auth = CannedAuth { result: Ok(session("t1")), during: Some(handle) };

    let signed_in = futures::executor::block_on(handle.login_with(&auth, &login_request())).unwrap();

    assert_eq!(handle.session_untracked(), Some(signed_in));
    assert_eq!(handle.client_untracked().authorization().as_deref(), Some("Bearer t1"));
}

#[test]
fn handle_login_failure_keeps_existing_session() {
    let handle = SessionHandle::new();
    let first = CannedAuth { result: Ok(session("t0")), during: None };
    futures::executor::block_on(handle.login_with(&first, &login_request())).unwrap();

    let err = ApiError::Unauthorized { status: 401, message: "nope".to_owned() };
    let failing = CannedAuth { result: Err(err.clone()), during: None };
    let result = futures::executor::block_on(handle.login_with(&failing, &login_request()));

    assert_eq!(result, Err(err));
    assert_eq!(handle.session_untracked().map(|s| s.token().to_owned()).as_deref(), Some("t0"));
}
