use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStore;

fn session(value: Value) -> Session {
    serde_json::from_value(value).unwrap()
}

#[test]
fn draft_defaults_to_email_notifications_only() {
    let draft = SettingsDraft::from_session(&session(serde_json::json!({ "name": "Asha", "token": "t1" })));
    assert_eq!(draft.name, "Asha");
    assert_eq!(draft.email, "");
    assert_eq!(draft.notifications, Notifications { email: true, push: false });
}

#[test]
fn draft_reads_stored_notifications() {
    let current = session(serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "token": "t1",
        "settings": { "notifications": { "push": true } }
    }));

    let draft = SettingsDraft::from_session(&current);

    assert_eq!(draft.email, "asha@example.com");
    assert_eq!(draft.notifications, Notifications { email: true, push: true });
}

#[test]
fn fields_nest_notifications_and_keep_other_settings() {
    let current = session(serde_json::json!({
        "name": "Asha",
        "token": "t1",
        "settings": { "theme": "dark", "notifications": { "email": true, "push": false } }
    }));
    let draft = SettingsDraft {
        name: " Asha Rao ".to_owned(),
        email: "asha@example.com".to_owned(),
        notifications: Notifications { email: false, push: true },
    };

    let fields = draft.to_fields(&current).unwrap();

    assert_eq!(
        Value::Object(fields),
        serde_json::json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "settings": { "theme": "dark", "notifications": { "email": false, "push": true } }
        })
    );
}

#[test]
fn blank_name_or_email_is_rejected() {
    let current = session(serde_json::json!({ "name": "A", "token": "t1" }));
    let blank_name = SettingsDraft { email: "a@b.com".to_owned(), ..SettingsDraft::default() };
    let blank_email = SettingsDraft { name: "A".to_owned(), ..SettingsDraft::default() };

    assert_eq!(blank_name.to_fields(&current), Err(FormError::Missing("Full Name")));
    assert_eq!(blank_email.to_fields(&current), Err(FormError::Missing("Email Address")));
}

#[test]
fn saved_record_updates_session_identity() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.establish(session(serde_json::json!({ "name": "A", "email": "a@b.com", "token": "t1" })));
    let draft = SettingsDraft {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        notifications: Notifications::default(),
    };
    let fields = draft.to_fields(store.current().unwrap()).unwrap();

    let current = store.update(fields).unwrap();

    assert_eq!(current.name(), "Asha");
    assert_eq!(current.email(), "asha@example.com");
    assert_eq!(current.token(), "t1");
    assert_eq!(SettingsDraft::from_session(current).notifications, Notifications::default());
}
