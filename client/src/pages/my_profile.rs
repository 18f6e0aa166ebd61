//! Profile editor. Saved changes are merged into the session so every page
//! sees the new name and details without a reload.

#[cfg(test)]
#[path = "my_profile_test.rs"]
mod my_profile_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::components::shell::AppShell;
use crate::state::auth::SessionHandle;
use crate::state::session::Session;
use crate::util::form::{FieldKind, FormError, FormField, FormValues, initial_values, to_body};

const PERSONAL_INFO: &str = "personalInfo";
const EDUCATIONAL_INFO: &str = "educationalInfo";

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind, required: false, placeholder: "" }
}

const PERSONAL_FIELDS: [FormField; 4] = [
    field("dateOfBirth", "Date of Birth", FieldKind::Date),
    field("location", "Location", FieldKind::Text),
    field("contact", "Contact Number", FieldKind::Text),
    field("gender", "Gender", FieldKind::Text),
];

const EDUCATIONAL_FIELDS: [FormField; 4] = [
    field("grade", "Current Grade/Year", FieldKind::Text),
    field("stream", "Stream/Major", FieldKind::Text),
    field("school", "School/College Name", FieldKind::Text),
    field("board", "Board/University", FieldKind::Text),
];

/// Editable copy of the profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProfileDraft {
    name: String,
    personal: FormValues,
    educational: FormValues,
}

impl ProfileDraft {
    fn from_session(session: &Session) -> Self {
        let mut personal = initial_values(&PERSONAL_FIELDS, session.profile_section(PERSONAL_INFO));
        // Stored as a full timestamp; the date input wants `YYYY-MM-DD`.
        if let Some(date) = personal.get_mut("dateOfBirth") {
            if let Some((day, _)) = date.split_once('T') {
                *date = day.to_owned();
            }
        }
        Self {
            name: session.name().to_owned(),
            personal,
            educational: initial_values(&EDUCATIONAL_FIELDS, session.profile_section(EDUCATIONAL_INFO)),
        }
    }

    /// Request body: the edited fields merged over the existing sections so
    /// keys this page does not edit are kept.
    fn to_fields(&self, session: &Session) -> Result<Map<String, Value>, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing("Name"));
        }
        let mut fields = Map::new();
        fields.insert("name".to_owned(), Value::String(name.to_owned()));
        for (key, specs, values) in [
            (PERSONAL_INFO, &PERSONAL_FIELDS, &self.personal),
            (EDUCATIONAL_INFO, &EDUCATIONAL_FIELDS, &self.educational),
        ] {
            let mut section = session.profile_section(key).cloned().unwrap_or_default();
            section.extend(to_body(specs, values)?);
            fields.insert(key.to_owned(), Value::Object(section));
        }
        Ok(fields)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Failed(String),
}

#[component]
pub fn MyProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <MyProfileContent/>
        </AppShell>
    }
}

#[component]
fn MyProfileContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let draft = RwSignal::new(ProfileDraft::default());
    let status = RwSignal::new(SaveStatus::Idle);

    // Re-seed the form whenever the session changes (restore or save).
    Effect::new(move || {
        if let Some(current) = session.session() {
            draft.set(ProfileDraft::from_session(&current));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = session.session_untracked() else {
            return;
        };
        let fields = match draft.with_untracked(|d| d.to_fields(&current)) {
            Ok(fields) => fields,
            Err(e) => {
                status.set(SaveStatus::Failed(e.to_string()));
                return;
            }
        };
        status.set(SaveStatus::Saving);
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = crate::net::endpoints::update_my_profile(&client, &fields).await;
            let outcome = match saved {
                Ok(record) => session.update(record).map_err(|e| e.to_string()),
                Err(e) => Err(e.user_message()),
            };
            match outcome {
                Ok(()) => {
                    status.set(SaveStatus::Saved);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                    if status.try_get_untracked() == Some(SaveStatus::Saved) {
                        let _ = status.try_set(SaveStatus::Idle);
                    }
                }
                Err(message) => {
                    log::warn!("profile save failed: {message}");
                    status.set(SaveStatus::Failed(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, fields);
    };

    let name = move || draft.with(|d| d.name.clone());

    view! {
        <section class="page profile">
            <form class="form profile__form" on:submit=on_submit>
                <input
                    class="profile__name"
                    type="text"
                    prop:value=name
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        draft.update(|d| d.name = next);
                    }
                />
                <p class="card__meta">{move || session.session().map(|s| s.email().to_owned()).unwrap_or_default()}</p>
                <h3>"Personal Information"</h3>
                <ProfileSection fields=&PERSONAL_FIELDS draft personal=true/>
                <h3>"Educational Background"</h3>
                <ProfileSection fields=&EDUCATIONAL_FIELDS draft personal=false/>
                <div class="profile__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || status.get() == SaveStatus::Saving>
                        {move || if status.get() == SaveStatus::Saving { "Saving…" } else { "Save Changes" }}
                    </button>
                    {move || match status.get() {
                        SaveStatus::Saved => Some(view! { <span class="status status--ok">"Saved!"</span> }.into_any()),
                        SaveStatus::Failed(message) => {
                            Some(view! { <span class="status status--error">{message}</span> }.into_any())
                        }
                        SaveStatus::Idle | SaveStatus::Saving => None,
                    }}
                </div>
            </form>
        </section>
    }
}

#[component]
fn ProfileSection(fields: &'static [FormField], draft: RwSignal<ProfileDraft>, personal: bool) -> impl IntoView {
    fields
        .iter()
        .map(|field| {
            let name = field.name;
            let value = move || {
                draft.with(|d| {
                    let values = if personal { &d.personal } else { &d.educational };
                    values.get(name).cloned().unwrap_or_default()
                })
            };
            view! {
                <label class="form__field">
                    <span class="form__label">{field.label}</span>
                    <input
                        class="form__input"
                        type=field.kind.input_type()
                        prop:value=value
                        on:input=move |ev| {
                            let next = event_target_value(&ev);
                            draft
                                .update(|d| {
                                    let values = if personal { &mut d.personal } else { &mut d.educational };
                                    values.insert(name, next);
                                });
                        }
                    />
                </label>
            }
        })
        .collect_view()
}
