//! College browser with stream and location filters.

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::save_button::SaveButton;
use crate::components::shell::AppShell;
use crate::net::endpoints::{self, COLLEGE_STREAMS, CollegeFilter};
use crate::net::types::{College, SaveTarget, SavedKind};
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

#[component]
pub fn ExploreCollegesPage() -> impl IntoView {
    view! {
        <AppShell>
            <ExploreCollegesContent/>
        </AppShell>
    }
}

#[component]
fn ExploreCollegesContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let stream = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let colleges = use_remote(move || {
        let client = session.signed_in_client()?;
        let filter = CollegeFilter { stream: stream.get(), location: location.get() };
        Some(async move { endpoints::list_colleges(&client, &filter).await })
    });

    view! {
        <section class="page colleges">
            <h1>"Explore Colleges"</h1>
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search for colleges by location..."
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    prop:value=move || stream.get()
                    on:change=move |ev| stream.set(event_target_value(&ev))
                >
                    <option value="">"All Streams"</option>
                    {COLLEGE_STREAMS.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
            </div>
            {remote_view(
                colleges,
                |items: Vec<College>| {
                    if items.is_empty() {
                        return view! { <p class="empty">"No colleges found."</p> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {items.into_iter().map(|college| view! { <CollegeCard college/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                },
            )}
        </section>
    }
}

#[component]
fn CollegeCard(college: College) -> impl IntoView {
    let target = SaveTarget { item_id: college.id.clone(), item_type: SavedKind::College };
    let href = format!("/colleges/{}", college.id);
    view! {
        <div class="card college-card">
            {college.image.map(|src| view! { <img class="card__image" src=src alt=""/> })}
            <h3>{college.name}</h3>
            <p class="card__meta">{college.location.unwrap_or_default()}</p>
            {college.nirf_ranking.map(|rank| view! { <span class="badge">{format!("NIRF #{rank}")}</span> })}
            <div class="card__actions">
                <a class="btn" href=href>
                    "View Details"
                </a>
                <SaveButton target/>
            </div>
        </div>
    }
}
