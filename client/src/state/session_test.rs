use super::*;
use crate::util::storage::MemoryStore;
use futures::executor::block_on;

/// Authenticator returning a canned result and recording what it was asked.
struct FakeAuth {
    result: Result<Session, ApiError>,
    seen: std::cell::RefCell<Vec<AuthRequest>>,
}

impl FakeAuth {
    fn ok(payload: Value) -> Self {
        Self { result: Ok(serde_json::from_value(payload).unwrap()), seen: std::cell::RefCell::default() }
    }

    fn failing(err: ApiError) -> Self {
        Self { result: Err(err), seen: std::cell::RefCell::default() }
    }
}

impl Authenticator for FakeAuth {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        self.result.clone()
    }
}

fn login_request() -> AuthRequest {
    AuthRequest::Login { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn persisted(store: &MemoryStore) -> Option<Value> {
    store.read(SESSION_KEY).map(|raw| serde_json::from_str(&raw).unwrap())
}

// =============================================================
// login
// =============================================================

#[test]
fn login_sets_active_session_and_persists_payload() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    let auth = FakeAuth::ok(serde_json::json!({ "name": "A", "isAdmin": false, "token": "t1" }));

    let session = block_on(store.login(&auth, &login_request())).unwrap();

    assert_eq!(session.token(), "t1");
    assert_eq!(store.current(), Some(&session));
    assert_eq!(store.token(), Some("t1"));
    assert_eq!(persisted(&storage), Some(serde_json::json!({ "name": "A", "isAdmin": false, "token": "t1" })));
    assert_eq!(auth.seen.borrow().as_slice(), &[login_request()]);
}

#[test]
fn failed_login_leaves_state_and_storage_untouched() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    store.establish(serde_json::from_value(serde_json::json!({ "name": "Old", "token": "t0" })).unwrap());
    let before = storage.read(SESSION_KEY);

    let err = ApiError::Unauthorized { status: 401, message: "Invalid email or password".to_owned() };
    let result = block_on(store.login(&FakeAuth::failing(err.clone()), &login_request()));

    assert_eq!(result, Err(err));
    assert_eq!(store.token(), Some("t0"));
    assert_eq!(storage.read(SESSION_KEY), before);
}

#[test]
fn login_preserves_extra_profile_fields() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    let auth = FakeAuth::ok(serde_json::json!({
        "_id": "u1",
        "name": "Asha Rao",
        "email": "asha@example.com",
        "isAdmin": true,
        "token": "t9",
        "personalInfo": { "location": "Pune" }
    }));

    let session = block_on(store.login(&auth, &login_request())).unwrap();

    assert!(store.is_admin());
    assert_eq!(session.first_name(), "Asha");
    assert_eq!(session.profile_section("personalInfo").and_then(|p| p.get("location")), Some(&Value::from("Pune")));
    assert_eq!(persisted(&storage).unwrap()["personalInfo"]["location"], "Pune");
}

#[test]
fn persisted_session_is_the_payload_verbatim() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    let payload = serde_json::json!({ "name": "A", "token": "t1" });

    block_on(store.login(&FakeAuth::ok(payload.clone()), &login_request())).unwrap();

    assert_eq!(persisted(&storage), Some(payload));
}

#[test]
fn login_accepts_null_identity_fields() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    let payload = serde_json::json!({ "name": null, "email": null, "isAdmin": false, "token": "t1" });

    let session = block_on(store.login(&FakeAuth::ok(payload.clone()), &login_request())).unwrap();

    assert_eq!(session.name(), "");
    assert_eq!(session.email(), "");
    assert_eq!(session.first_name(), "");
    assert_eq!(persisted(&storage), Some(payload));
}

#[test]
fn session_payload_requires_string_token() {
    let missing = serde_json::from_value::<Session>(serde_json::json!({ "name": "A" }));
    let numeric = serde_json::from_value::<Session>(serde_json::json!({ "name": "A", "token": 7 }));
    assert!(missing.is_err());
    assert!(numeric.is_err());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_storage_entry() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    block_on(store.login(&FakeAuth::ok(serde_json::json!({ "name": "A", "token": "t1" })), &login_request())).unwrap();

    store.logout();

    assert_eq!(store.current(), None);
    assert!(!store.is_admin());
    assert_eq!(storage.read(SESSION_KEY), None);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_overwrites_field_and_keeps_token() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    let auth = FakeAuth::ok(serde_json::json!({ "name": "A", "isAdmin": false, "token": "t1" }));
    block_on(store.login(&auth, &login_request())).unwrap();

    let updated = store.update(fields(serde_json::json!({ "name": "B" }))).unwrap().clone();

    assert_eq!(updated.token(), "t1");
    assert_eq!(updated.name(), "B");
    assert!(!updated.is_admin());
    assert_eq!(persisted(&storage).unwrap()["name"], "B");
}

#[test]
fn update_ignores_incoming_token() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.establish(serde_json::from_value(serde_json::json!({ "name": "A", "token": "t1" })).unwrap());

    store.update(fields(serde_json::json!({ "token": "other", "email": "new@b.com" }))).unwrap();

    assert_eq!(store.token(), Some("t1"));
    assert_eq!(store.current().unwrap().email(), "new@b.com");
}

#[test]
fn update_merges_new_profile_sections() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.establish(serde_json::from_value(serde_json::json!({ "name": "A", "token": "t1" })).unwrap());

    store.update(fields(serde_json::json!({ "educationalInfo": { "grade": "12" } }))).unwrap();

    let session = store.current().unwrap();
    assert_eq!(session.profile_section("educationalInfo").unwrap()["grade"], "12");
    assert_eq!(session.name(), "A");
}

#[test]
fn update_without_session_fails() {
    let storage = MemoryStore::new();
    let mut store = SessionStore::new(storage.clone());
    assert_eq!(store.update(fields(serde_json::json!({ "name": "B" }))).unwrap_err(), SessionError::NoSession);
    assert_eq!(storage.read(SESSION_KEY), None);
}

#[test]
fn update_with_invalid_field_type_leaves_session_unchanged() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.establish(serde_json::from_value(serde_json::json!({ "name": "A", "token": "t1" })).unwrap());

    let err = store.update(fields(serde_json::json!({ "isAdmin": "yes" }))).unwrap_err();

    assert!(matches!(err, SessionError::Invalid(_)));
    assert!(!store.is_admin());
    assert_eq!(store.current().unwrap().name(), "A");
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_persisted_session_is_anonymous() {
    let mut store = SessionStore::new(MemoryStore::new());
    assert!(!store.is_restored());
    assert_eq!(store.restore(), None);
    assert!(store.is_restored());
}

#[test]
fn restore_with_corrupted_data_is_anonymous_and_clears_entry() {
    let storage = MemoryStore::with_entry(SESSION_KEY, "{\"name\": \"A\", ");
    let mut store = SessionStore::new(storage.clone());

    assert_eq!(store.restore(), None);
    assert_eq!(storage.read(SESSION_KEY), None);
}

#[test]
fn restore_with_tokenless_record_is_anonymous() {
    let storage = MemoryStore::with_entry(SESSION_KEY, r#"{"name":"A","isAdmin":true}"#);
    let mut store = SessionStore::new(storage);
    assert_eq!(store.restore(), None);
    assert!(!store.is_admin());
}

#[test]
fn restore_adopts_session_written_by_previous_store() {
    let storage = MemoryStore::new();
    let mut first = SessionStore::new(storage.clone());
    block_on(first.login(&FakeAuth::ok(serde_json::json!({ "name": "A", "token": "t1" })), &login_request())).unwrap();
    first.update(fields(serde_json::json!({ "name": "B" }))).unwrap();

    let mut second = SessionStore::new(storage);
    let restored = second.restore().cloned().unwrap();

    assert_eq!(restored.token(), "t1");
    assert_eq!(restored.name(), "B");
}

// =============================================================
// AuthRequest
// =============================================================

#[test]
fn auth_request_paths_and_payloads() {
    let register =
        AuthRequest::Register { name: "A".to_owned(), email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert_eq!(login_request().path(), "/users/login");
    assert_eq!(register.path(), "/users/register");
    assert_eq!(login_request().payload(), serde_json::json!({ "email": "a@b.com", "password": "x" }));
    assert_eq!(register.payload()["name"], "A");
}
