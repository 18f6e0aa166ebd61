//! Saved colleges, careers, and resources with unsave.

use leptos::prelude::*;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{SaveTarget, SavedItem, SavedItems, SavedKind};
use crate::state::auth::SessionHandle;
use crate::util::remote::{Remote, use_remote};

#[component]
pub fn SavedItemsPage() -> impl IntoView {
    view! {
        <AppShell>
            <SavedItemsContent/>
        </AppShell>
    }
}

#[component]
fn SavedItemsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let tab = RwSignal::new(SavedKind::College);
    let error = RwSignal::new(None::<String>);

    let saved = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::saved_items(&client).await })
    });

    view! {
        <section class="page saved">
            <h1>"My Saved Items"</h1>
            <p class="page__subtitle">"Your personal collection of saved colleges, careers, and resources."</p>
            <div class="tabs">
                {SavedKind::ALL
                    .iter()
                    .map(|kind| {
                        let kind = *kind;
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == kind
                                on:click=move |_| tab.set(kind)
                            >
                                {kind.tab_label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ActionError error/>
            {remote_view(
                saved,
                move |items: SavedItems| {
                    move || {
                        let kind = tab.get();
                        let entries = items.of_kind(kind).to_vec();
                        if entries.is_empty() {
                            return view! {
                                <p class="empty">"Start exploring and save items to see them here!"</p>
                            }
                                .into_any();
                        }
                        view! {
                            <div class="card-grid">
                                {entries
                                    .into_iter()
                                    .map(|item| view! { <SavedCard item kind saved error/> })
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
fn SavedCard(
    item: SavedItem,
    kind: SavedKind,
    saved: Remote<SavedItems>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let target = SaveTarget { item_id: item.id.clone(), item_type: kind };

    let on_unsave = move |_| {
        let client = session.client_untracked();
        let target = target.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match endpoints::unsave_item(&client, &target).await {
                Ok(()) => saved.refetch(),
                Err(e) => error.set(Some(format!("Failed to unsave item. {}", e.user_message()))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, target, saved, error);
    };

    let meta = item.location.clone().or_else(|| item.category.clone()).unwrap_or_default();
    view! {
        <div class="card saved-card">
            {item.image.clone().map(|src| view! { <img class="card__image" src=src alt=""/> })}
            <h3>{item.label().to_owned()}</h3>
            <p class="card__meta">{meta}</p>
            <button class="btn btn--danger" on:click=on_unsave>
                "Unsave"
            </button>
        </div>
    }
}
