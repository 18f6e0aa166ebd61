//! Resource library: filterable articles, videos, and webinars with a
//! bookmark toggle on each card.

#[cfg(test)]
#[path = "resource_library_test.rs"]
mod resource_library_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{Resource, SaveTarget, SavedItems, SavedKind};
use crate::state::auth::SessionHandle;
use crate::util::remote::{Remote, use_remote};

pub const ALL_TYPES: &str = "All Types";
pub const ALL_FIELDS: &str = "All Fields";

pub const RESOURCE_TYPES: [&str; 4] = [ALL_TYPES, "Article", "Video", "Webinar"];
pub const RESOURCE_FIELDS: [&str; 6] = [ALL_FIELDS, "Technology", "Healthcare", "Creative", "Business", "Guidance"];

/// Placeholder artwork for resources without an image.
const FALLBACK_IMAGE: &str = "https://i.imgur.com/gT3h3n3.png";

/// A resource and whether the student has bookmarked it.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryEntry {
    pub resource: Resource,
    pub saved: bool,
}

/// Pair every resource with its bookmark state.
pub fn mark_saved(resources: Vec<Resource>, saved: &SavedItems) -> Vec<LibraryEntry> {
    let ids: HashSet<&str> = saved.resources.iter().map(|item| item.id.as_str()).collect();
    resources
        .into_iter()
        .map(|resource| {
            let saved = ids.contains(resource.id.as_str());
            LibraryEntry { resource, saved }
        })
        .collect()
}

/// Flip the bookmark on `id`; returns the previous state when found.
pub fn toggle_saved(entries: &mut [LibraryEntry], id: &str) -> Option<bool> {
    let entry = entries.iter_mut().find(|entry| entry.resource.id == id)?;
    let was_saved = entry.saved;
    entry.saved = !was_saved;
    Some(was_saved)
}

/// Client-side filter over the loaded library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceFilter {
    pub search: String,
    pub kind: String,
    pub field: String,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self { search: String::new(), kind: ALL_TYPES.to_owned(), field: ALL_FIELDS.to_owned() }
    }
}

impl ResourceFilter {
    /// Case-insensitive title search plus exact type and field matches.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        let search = self.search.trim().to_lowercase();
        resource.title.to_lowercase().contains(&search)
            && (self.kind == ALL_TYPES || resource.kind == self.kind)
            && (self.field == ALL_FIELDS || resource.field == self.field)
    }
}

#[component]
pub fn ResourceLibraryPage() -> impl IntoView {
    view! {
        <AppShell>
            <ResourceLibraryContent/>
        </AppShell>
    }
}

#[component]
fn ResourceLibraryContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let filter = RwSignal::new(ResourceFilter::default());
    let error = RwSignal::new(None::<String>);

    let library = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move {
            let resources = endpoints::list_resources(&client).await?;
            let saved = endpoints::saved_items(&client).await?;
            Ok(mark_saved(resources, &saved))
        })
    });

    view! {
        <section class="page resources">
            <h1>"Resource Library"</h1>
            <p class="page__subtitle">"Your curated collection of content to explore and prepare for your future."</p>
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search resources by title..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    prop:value=move || filter.with(|f| f.kind.clone())
                    on:change=move |ev| filter.update(|f| f.kind = event_target_value(&ev))
                >
                    {RESOURCE_TYPES.iter().map(|kind| view! { <option value=*kind>{*kind}</option> }).collect_view()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || filter.with(|f| f.field.clone())
                    on:change=move |ev| filter.update(|f| f.field = event_target_value(&ev))
                >
                    {RESOURCE_FIELDS.iter().map(|field| view! { <option value=*field>{*field}</option> }).collect_view()}
                </select>
                <button class="btn" on:click=move |_| filter.set(ResourceFilter::default())>
                    "Clear"
                </button>
            </div>
            <ActionError error/>
            {remote_view(
                library,
                move |entries: Vec<LibraryEntry>| {
                    move || {
                        let visible: Vec<LibraryEntry> = filter
                            .with(|f| entries.iter().filter(|entry| f.matches(&entry.resource)).cloned().collect());
                        if visible.is_empty() {
                            return view! {
                                <div class="empty">
                                    <h3>"No Resources Found"</h3>
                                    <p>"Try adjusting your filters or search term."</p>
                                </div>
                            }
                                .into_any();
                        }
                        view! {
                            <div class="card-grid">
                                {visible
                                    .into_iter()
                                    .map(|entry| view! { <ResourceCard entry library error/> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                },
            )}
        </section>
    }
}

#[component]
fn ResourceCard(
    entry: LibraryEntry,
    library: Remote<Vec<LibraryEntry>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let LibraryEntry { resource, saved } = entry;
    let id = resource.id.clone();

    let on_toggle = move |_| {
        let mut previous = None;
        library.edit(|entries| previous = toggle_saved(entries, &id));
        let Some(was_saved) = previous else {
            return;
        };
        let client = session.client_untracked();
        let target = SaveTarget { item_id: id.clone(), item_type: SavedKind::Resource };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if was_saved {
                endpoints::unsave_item(&client, &target).await
            } else {
                endpoints::save_item(&client, &target).await.map(|_| ())
            };
            if let Err(e) = result {
                log::warn!("toggle save {} failed: {e}", target.item_id);
                library.edit(|entries| {
                    toggle_saved(entries, &target.item_id);
                });
                error.set(Some("Failed to update saved status.".to_owned()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, target, was_saved, error);
    };

    let action = resource.action_label();
    let image = resource.image.clone().unwrap_or_else(|| FALLBACK_IMAGE.to_owned());
    let href = resource.link.clone().unwrap_or_else(|| "#".to_owned());
    let alt = resource.title.clone();
    view! {
        <div class="card resource-card">
            <div class="resource-card__media">
                <img class="card__image" src=image alt=alt/>
                <button
                    class="resource-card__save"
                    class:resource-card__save--active=saved
                    title=if saved { "Remove from saved" } else { "Save" }
                    on:click=on_toggle
                >
                    {if saved { "♥" } else { "♡" }}
                </button>
            </div>
            <p class="card__meta">
                <span class="resource-card__type">{resource.kind}</span>
                " • "
                {resource.field}
            </p>
            <h3>{resource.title}</h3>
            <a class="btn btn--primary" href=href target="_blank" rel="noreferrer">
                {action}
            </a>
        </div>
    }
}
