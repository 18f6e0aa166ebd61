//! Account and notification settings, saved through the profile endpoint
//! and merged into the session on success.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::shell::AppShell;
use crate::state::auth::SessionHandle;
use crate::state::session::Session;
use crate::util::form::FormError;

const SETTINGS: &str = "settings";
const NOTIFICATIONS: &str = "notifications";

const SAVED: &str = "Saved successfully!";
const SAVE_FAILED: &str = "Failed to save. Please try again.";

/// Notification channels the student has opted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Notifications {
    email: bool,
    push: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self { email: true, push: false }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SettingsDraft {
    name: String,
    email: String,
    notifications: Notifications,
}

impl SettingsDraft {
    fn from_session(session: &Session) -> Self {
        let notifications = session
            .profile_section(SETTINGS)
            .and_then(|settings| settings.get(NOTIFICATIONS))
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default();
        Self { name: session.name().to_owned(), email: session.email().to_owned(), notifications }
    }

    /// Request body. Other keys under `settings` are carried over.
    fn to_fields(&self, session: &Session) -> Result<Map<String, Value>, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing("Full Name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("Email Address"));
        }
        let mut settings = session.profile_section(SETTINGS).cloned().unwrap_or_default();
        settings.insert(
            NOTIFICATIONS.to_owned(),
            serde_json::json!({ "email": self.notifications.email, "push": self.notifications.push }),
        );

        let mut fields = Map::new();
        fields.insert("name".to_owned(), Value::String(name.to_owned()));
        fields.insert("email".to_owned(), Value::String(email.to_owned()));
        fields.insert(SETTINGS.to_owned(), Value::Object(settings));
        Ok(fields)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveStatus {
    Idle,
    Saving,
    Done(String),
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppShell>
            <SettingsContent/>
        </AppShell>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let draft = RwSignal::new(SettingsDraft::default());
    let status = RwSignal::new(SaveStatus::Idle);

    Effect::new(move || {
        if let Some(current) = session.session() {
            draft.set(SettingsDraft::from_session(&current));
        }
    });

    let on_save = move |_| {
        if status.get_untracked() == SaveStatus::Saving {
            return;
        }
        let Some(current) = session.session_untracked() else {
            return;
        };
        let fields = match draft.with_untracked(|d| d.to_fields(&current)) {
            Ok(fields) => fields,
            Err(e) => {
                status.set(SaveStatus::Done(e.to_string()));
                return;
            }
        };
        status.set(SaveStatus::Saving);
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = crate::net::endpoints::update_my_profile(&client, &fields).await;
            let message = match saved.map_err(|e| e.to_string()).and_then(|record| {
                session.update(record).map_err(|e| e.to_string())
            }) {
                Ok(()) => SAVED,
                Err(e) => {
                    log::warn!("settings save failed: {e}");
                    SAVE_FAILED
                }
            };
            let done = SaveStatus::Done(message.to_owned());
            status.set(done.clone());
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            if status.try_get_untracked() == Some(done) {
                let _ = status.try_set(SaveStatus::Idle);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, fields);
    };

    let status_text = move || match status.get() {
        SaveStatus::Idle => None,
        SaveStatus::Saving => Some("Saving...".to_owned()),
        SaveStatus::Done(message) => Some(message),
    };

    view! {
        <section class="page settings">
            <h1>"Settings"</h1>
            <div class="card settings__section">
                <h3>"Account"</h3>
                <label class="form__field">
                    <span class="form__label">"Full Name"</span>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let next = event_target_value(&ev);
                            draft.update(|d| d.name = next);
                        }
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Email Address"</span>
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| {
                            let next = event_target_value(&ev);
                            draft.update(|d| d.email = next);
                        }
                    />
                </label>
            </div>
            <div class="card settings__section">
                <h3>"Notifications"</h3>
                <NotificationToggle
                    label="Email Notifications"
                    description="Receive reports, updates, and news."
                    checked=Signal::derive(move || draft.with(|d| d.notifications.email))
                    on_toggle=Callback::new(move |()| draft.update(|d| d.notifications.email = !d.notifications.email))
                />
                <NotificationToggle
                    label="Push Notifications"
                    description="Get reminders on your mobile devices."
                    checked=Signal::derive(move || draft.with(|d| d.notifications.push))
                    on_toggle=Callback::new(move |()| draft.update(|d| d.notifications.push = !d.notifications.push))
                />
            </div>
            <div class="settings__actions">
                {move || status_text().map(|text| view! { <span class="status">{text}</span> })}
                <button class="btn btn--primary" on:click=on_save>
                    "Save Changes"
                </button>
            </div>
        </section>
    }
}

#[component]
fn NotificationToggle(
    label: &'static str,
    description: &'static str,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <div>
                <p class="toggle__label">{label}</p>
                <p class="card__meta">{description}</p>
            </div>
            <input type="checkbox" prop:checked=move || checked.get() on:change=move |_| on_toggle.run(())/>
        </label>
    }
}
