//! Blog article list with category chips.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::BlogPost;
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

/// Chip that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by each distinct post category in first-seen order.
#[must_use]
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_owned()];
    for category in posts.iter().filter_map(|p| p.category.as_deref()).map(str::trim) {
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_owned());
        }
    }
    out
}

/// Posts in `category`; every post for [`ALL_CATEGORIES`].
#[must_use]
pub fn posts_in(posts: &[BlogPost], category: &str) -> Vec<BlogPost> {
    posts
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category.as_deref().map(str::trim) == Some(category))
        .cloned()
        .collect()
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <AppShell>
            <BlogContent/>
        </AppShell>
    }
}

#[component]
fn BlogContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let active = RwSignal::new(ALL_CATEGORIES.to_owned());

    let posts = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::list_posts(&client).await })
    });

    view! {
        <section class="page blog">
            <h1>"Insights & Articles"</h1>
            <p class="page__subtitle">"Your guide to navigating the world of education and careers."</p>
            {remote_view(
                posts,
                move |posts: Vec<BlogPost>| {
                    let chips = categories(&posts)
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            let selected = {
                                let name = name.clone();
                                move || active.with(|a| *a == name)
                            };
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=selected
                                    on:click=move |_| active.set(value.clone())
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="chips">{chips}</div>
                        {move || {
                            let shown = active.with(|category| posts_in(&posts, category));
                            if shown.is_empty() {
                                return view! { <p class="empty">"No articles in this category yet."</p> }.into_any();
                            }
                            view! {
                                <div class="card-grid">
                                    {shown.into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                                </div>
                            }
                                .into_any()
                        }}
                    }
                },
            )}
        </section>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    view! {
        <article class="card post-card">
            {post.image.map(|src| view! { <img class="card__image" src=src alt=post.title.clone()/> })}
            <p class="card__eyebrow">{post.category.unwrap_or_default()}</p>
            <h3>{post.title.clone()}</h3>
            <p>{post.excerpt.unwrap_or_default()}</p>
            <a class="card__link" href=href>
                "Read More →"
            </a>
        </article>
    }
}
