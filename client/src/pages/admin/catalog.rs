//! Shared create/edit/delete screen for catalog records.
//!
//! DESIGN
//! ======
//! Colleges, scholarships, careers, blog posts, and webinars are all managed
//! the same way: a table of rows, a [`FormModal`] driven by a static field
//! list, and an optimistic delete that puts the row back if the backend
//! refuses. Each record type describes its table and REST calls through
//! [`CatalogEntry`]; [`catalog_admin`] does the rest.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};

use super::editor::Editor;
use crate::components::form_modal::FormModal;
use crate::components::remote_view::{ActionError, remote_view};
use crate::net::api::{ApiClient, ApiError};
use crate::state::auth::SessionHandle;
use crate::state::remote::{restore_at, take_where};
use crate::util::dialog::confirm;
use crate::util::form::{FormField, initial_values};
use crate::util::remote::use_remote;

/// A record type editable from an admin catalog screen.
pub trait CatalogEntry: Clone + Serialize + Send + Sync + 'static {
    /// Singular display name, e.g. `"College"`.
    const NOUN: &'static str;
    /// Heading noun, e.g. `"Colleges"`.
    const PLURAL: &'static str;
    const FORM: &'static [FormField];
    /// Table headings, one per entry of [`CatalogEntry::cells`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &str;

    fn cells(&self) -> Vec<String>;

    fn list(client: ApiClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + 'static;

    fn create(client: ApiClient, body: Map<String, Value>) -> impl Future<Output = Result<Self, ApiError>> + 'static;

    fn update(
        client: ApiClient,
        id: String,
        body: Map<String, Value>,
    ) -> impl Future<Output = Result<Self, ApiError>> + 'static;

    fn delete(client: ApiClient, id: String) -> impl Future<Output = Result<(), ApiError>> + 'static;
}

/// Delete confirmation text for `noun`.
#[must_use]
pub fn delete_prompt(noun: &str) -> String {
    format!("Are you sure you want to delete this {}?", noun.to_lowercase())
}

/// Inline error after the backend refused to delete a `noun`.
#[must_use]
pub fn delete_failed(noun: &str) -> String {
    format!("Failed to delete {}.", noun.to_lowercase())
}

/// Table plus create/edit modal for every `T` the backend returns.
pub fn catalog_admin<T: CatalogEntry>() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let editor = RwSignal::new(Editor::<T>::Closed);

    let records = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(T::list(client))
    });

    let on_save = Callback::new(move |body: Map<String, Value>| {
        let target = editor.get_untracked();
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = match target.existing() {
                Some(existing) => T::update(client, existing.id().to_owned(), body).await,
                None => T::create(client, body).await,
            };
            match saved {
                Ok(record) => {
                    log::info!("saved {} {}", T::NOUN.to_lowercase(), record.id());
                    editor.set(Editor::Closed);
                    records.refetch();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, client, body, records);
    });

    let on_close = Callback::new(move |()| {
        editor.set(Editor::Closed);
        form_error.set(None);
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm(&delete_prompt(T::NOUN)) {
            return;
        }
        let mut removed = None;
        records.edit(|rows| removed = take_where(rows, |record| record.id() == id));
        let Some((index, record)) = removed else {
            return;
        };
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = T::delete(client, record.id().to_owned()).await {
                log::warn!("delete {} {} failed: {e}", T::NOUN.to_lowercase(), record.id());
                records.edit(|rows| restore_at(rows, index, record));
                error.set(Some(delete_failed(T::NOUN)));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, index, record);
    });

    let modal = move || {
        editor.with(Editor::is_open).then(|| {
            let (title, initial) = editor.with_untracked(|e| (e.title(T::NOUN), initial_values(T::FORM, e.existing())));
            view! { <FormModal title fields=T::FORM initial error=form_error on_submit=on_save on_close/> }
        })
    };

    view! {
        <section class="page admin-catalog">
            <div class="page__head">
                <h1>{format!("Manage {}", T::PLURAL)}</h1>
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Create)>
                    {format!("+ Add New {}", T::NOUN)}
                </button>
            </div>
            <ActionError error/>
            {remote_view(
                records,
                move |rows: Vec<T>| {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {T::COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|record| catalog_row(record, editor, on_delete)).collect_view()}
                            </tbody>
                        </table>
                    }
                },
            )}
            {modal}
        </section>
    }
}

fn catalog_row<T: CatalogEntry>(record: T, editor: RwSignal<Editor<T>>, on_delete: Callback<String>) -> impl IntoView {
    let id = record.id().to_owned();
    let cells = record.cells().into_iter().enumerate().map(|(column, cell)| {
        let class = (column == 0).then_some("table__strong");
        view! { <td class=class>{cell}</td> }
    });
    view! {
        <tr>
            {cells.collect_view()}
            <td class="table__actions">
                <button class="link" on:click=move |_| editor.set(Editor::Edit(record.clone()))>
                    "Edit"
                </button>
                <button class="link link--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
