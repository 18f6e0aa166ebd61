//! Single article with its comment thread.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{BlogPost, Comment};
use crate::state::auth::SessionHandle;
use crate::state::remote::{restore_at, take_where};
use crate::state::session::Session;
use crate::util::dialog::confirm;
use crate::util::format::{count_label, optional_date};
use crate::util::remote::{Remote, use_remote};

/// Authors may delete their own comments; admins may delete any.
#[must_use]
pub fn can_delete_comment(comment: &Comment, viewer: Option<&Session>) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    viewer.is_admin()
        || comment.author.as_ref().is_some_and(|author| !author.id.is_empty() && author.id == viewer.id())
}

/// Trimmed comment text, or `None` when there is nothing to post.
#[must_use]
pub fn comment_text(draft: &str) -> Option<String> {
    let text = draft.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    view! {
        <AppShell>
            <BlogPostContent/>
        </AppShell>
    }
}

#[component]
fn BlogPostContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let params = use_params_map();
    let post_id = move || params.with(|p| p.get("id"));

    let post = use_remote(move || {
        let client = session.signed_in_client()?;
        let id = post_id()?;
        Some(async move { endpoints::post(&client, &id).await })
    });
    let comments = use_remote(move || {
        let client = session.signed_in_client()?;
        let id = post_id()?;
        Some(async move { endpoints::list_comments(&client, &id).await })
    });

    view! {
        <section class="page blog-post">
            <a class="back-link" href="/blog">
                "← Back to Blog"
            </a>
            {remote_view(post, |post: BlogPost| view! { <Article post/> })}
            <CommentThread comments post_id=Signal::derive(post_id)/>
        </section>
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let byline = format!("By {}", post.byline());
    let date = optional_date(post.created_at.as_deref());
    view! {
        <article class="article">
            <p class="card__eyebrow">{post.category.unwrap_or_default()}</p>
            <h1>{post.title.clone()}</h1>
            <p class="article__meta">{byline} " • " {date}</p>
            {post.image.map(|src| view! { <img class="article__image" src=src alt=post.title.clone()/> })}
            <div class="article__body">
                {post
                    .content
                    .split("\n\n")
                    .filter(|para| !para.trim().is_empty())
                    .map(|para| view! { <p>{para.trim().to_owned()}</p> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn CommentThread(comments: Remote<Vec<Comment>>, post_id: Signal<Option<String>>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(text), Some(id)) = (draft.with_untracked(|d| comment_text(d)), post_id.get_untracked()) else {
            return;
        };
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match endpoints::add_comment(&client, &id, &text).await {
                Ok(created) => {
                    comments.edit(|list| list.insert(0, created));
                    draft.set(String::new());
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("comment on {id} failed: {e}");
                    error.set(Some("Could not post comment. Please try again.".to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, text, id);
    };

    let on_delete = Callback::new(move |comment_id: String| {
        if !confirm("Are you sure you want to delete this comment?") {
            return;
        }
        let mut removed = None;
        comments.edit(|list| removed = take_where(list, |c| c.id == comment_id));
        let Some((index, comment)) = removed else {
            return;
        };
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = endpoints::delete_comment(&client, &comment.id).await {
                log::warn!("delete comment {} failed: {e}", comment.id);
                comments.edit(|list| restore_at(list, index, comment));
                error.set(Some("Failed to delete comment.".to_owned()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, index, comment);
    });

    view! {
        <section class="comments">
            <h2>{move || count_label(comments.data().map_or(0, |list| list.len()), "Comment", "Comments")}</h2>
            <form class="form comments__form" on:submit=on_submit>
                <textarea
                    rows="3"
                    placeholder="Write a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Post Comment"
                </button>
            </form>
            <ActionError error/>
            {remote_view(
                comments,
                move |list: Vec<Comment>| {
                    list.into_iter()
                        .map(|comment| view! { <CommentCard comment on_delete/> })
                        .collect_view()
                },
            )}
        </section>
    }
}

#[component]
fn CommentCard(comment: Comment, on_delete: Callback<String>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let author = comment.author.clone().unwrap_or_default();
    let name = if author.name.is_empty() { "Anonymous".to_owned() } else { author.name };
    let avatar = author.profile_picture_url.unwrap_or_else(|| "/default-avatar.png".to_owned());
    let date = optional_date(comment.created_at.as_deref());
    let id = comment.id.clone();
    let deletable = {
        let comment = comment.clone();
        move || can_delete_comment(&comment, session.session().as_ref())
    };
    let delete_button = move || {
        deletable().then(|| {
            let id = id.clone();
            view! {
                <button class="link link--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            }
        })
    };

    view! {
        <div class="comment">
            <img class="comment__avatar" src=avatar alt=name.clone()/>
            <div class="comment__body">
                <div class="comment__head">
                    <strong>{name}</strong>
                    {delete_button}
                </div>
                <p class="comment__date">{date}</p>
                <p>{comment.text}</p>
            </div>
        </div>
    }
}
