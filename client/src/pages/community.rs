//! Community hub: category feed and a composer for new discussions.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints::{self, ALL_DISCUSSIONS, DISCUSSION_CATEGORIES, DiscussionFilter};
use crate::net::types::{Discussion, NewDiscussion};
use crate::state::auth::SessionHandle;
use crate::util::format::optional_date;
use crate::util::remote::use_remote;

/// Category preselected in the composer.
const DEFAULT_CATEGORY: &str = "General";

/// Unsent discussion typed into the composer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscussionDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl Default for DiscussionDraft {
    fn default() -> Self {
        Self { title: String::new(), content: String::new(), category: DEFAULT_CATEGORY.to_owned() }
    }
}

impl DiscussionDraft {
    /// Request body, or the message to show when a field is blank.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when title or content is empty.
    pub fn to_request(&self) -> Result<NewDiscussion, &'static str> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err("Please fill in both title and content.");
        }
        let category = if DISCUSSION_CATEGORIES.contains(&self.category.as_str()) {
            self.category.clone()
        } else {
            DEFAULT_CATEGORY.to_owned()
        };
        Ok(NewDiscussion { title: title.to_owned(), content: content.to_owned(), category })
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <AppShell>
            <CommunityContent/>
        </AppShell>
    }
}

#[component]
fn CommunityContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let category = RwSignal::new(ALL_DISCUSSIONS.to_owned());
    let draft = RwSignal::new(DiscussionDraft::default());
    let expanded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let discussions = use_remote(move || {
        let client = session.signed_in_client()?;
        let filter = DiscussionFilter { category: category.get() };
        Some(async move { endpoints::list_discussions(&client, &filter).await })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match draft.with_untracked(DiscussionDraft::to_request) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match endpoints::create_discussion(&client, &request).await {
                Ok(_) => {
                    draft.set(DiscussionDraft::default());
                    expanded.set(false);
                    error.set(None);
                    discussions.refetch();
                }
                Err(e) => {
                    log::warn!("create discussion failed: {e}");
                    error.set(Some("Failed to create post. Please try again.".to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, request);
    };

    let on_cancel = move |_| {
        draft.set(DiscussionDraft::default());
        expanded.set(false);
    };

    let category_buttons = std::iter::once(ALL_DISCUSSIONS)
        .chain(DISCUSSION_CATEGORIES)
        .map(|name| {
            view! {
                <button
                    class="community__category"
                    class:community__category--active=move || category.with(|c| c == name)
                    on:click=move |_| category.set(name.to_owned())
                >
                    "# "
                    {name}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="page community">
            <h1>"Community Hub"</h1>
            <p class="page__subtitle">"Join the conversation, ask questions, and connect with peers."</p>
            <div class="community__layout">
                <nav class="community__categories">{category_buttons}</nav>
                <div class="community__feed">
                    <form class="form community__composer" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Start a new discussion..."
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:focus=move |_| expanded.set(true)
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                        <Show when=move || expanded.get()>
                            <textarea
                                rows="4"
                                placeholder="Add more details..."
                                prop:value=move || draft.with(|d| d.content.clone())
                                on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                            ></textarea>
                            <div class="form__actions">
                                <select
                                    prop:value=move || draft.with(|d| d.category.clone())
                                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                                >
                                    {DISCUSSION_CATEGORIES
                                        .iter()
                                        .map(|name| view! { <option value=*name>{*name}</option> })
                                        .collect_view()}
                                </select>
                                <button class="btn btn--ghost" type="button" on:click=on_cancel>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit">
                                    "Post"
                                </button>
                            </div>
                        </Show>
                    </form>
                    <ActionError error/>
                    {remote_view(
                        discussions,
                        |items: Vec<Discussion>| {
                            if items.is_empty() {
                                return view! { <p class="empty">"No discussions yet. Start one!"</p> }.into_any();
                            }
                            items
                                .into_iter()
                                .map(|discussion| view! { <DiscussionCard discussion/> })
                                .collect_view()
                                .into_any()
                        },
                    )}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DiscussionCard(discussion: Discussion) -> impl IntoView {
    let author = discussion.author.unwrap_or_default();
    let name = if author.name.is_empty() { "Unknown User".to_owned() } else { author.name };
    view! {
        <article class="card discussion">
            <h3>{discussion.title}</h3>
            <p class="card__meta">
                "Posted by " <strong>{name}</strong> " • " {optional_date(discussion.created_at.as_deref())}
            </p>
            <span class="tag">{discussion.category}</span>
            <p class="discussion__content">{discussion.content}</p>
        </article>
    }
}
