//! Single college profile.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::remote_view::remote_view;
use crate::components::save_button::SaveButton;
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{College, SaveTarget, SavedKind};
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

#[component]
pub fn CollegeDetailsPage() -> impl IntoView {
    view! {
        <AppShell>
            <CollegeDetailsContent/>
        </AppShell>
    }
}

#[component]
fn CollegeDetailsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let params = use_params_map();

    let college = use_remote(move || {
        let client = session.signed_in_client()?;
        let id = params.with(|p| p.get("id"))?;
        Some(async move { endpoints::college(&client, &id).await })
    });

    view! {
        <section class="page college-details">
            <a class="back-link" href="/explore-colleges">
                "← Back to colleges"
            </a>
            {remote_view(college, |college: College| view! { <CollegeProfile college/> })}
        </section>
    }
}

#[component]
fn CollegeProfile(college: College) -> impl IntoView {
    let target = SaveTarget { item_id: college.id.clone(), item_type: SavedKind::College };
    view! {
        {college.image.map(|src| view! { <img class="college-details__hero" src=src alt=college.name.clone()/> })}
        <div class="college-details__head">
            <div>
                <h1>{college.name.clone()}</h1>
                <p class="card__meta">{college.location.unwrap_or_default()}</p>
            </div>
            <SaveButton target/>
            {college
                .brochure_url
                .map(|href| view! { <a class="btn" href=href target="_blank" rel="noreferrer">"Download Brochure"</a> })}
        </div>
        <dl class="facts">
            <dt>"Stream"</dt>
            <dd>{college.stream.unwrap_or_else(|| "—".to_owned())}</dd>
            <dt>"NIRF Ranking"</dt>
            <dd>{college.nirf_ranking.unwrap_or_else(|| "—".to_owned())}</dd>
            <dt>"Fees"</dt>
            <dd>{college.fees.unwrap_or_else(|| "—".to_owned())}</dd>
        </dl>
        <h3>"Overview"</h3>
        <p>{college.description.unwrap_or_default()}</p>
        {(!college.courses.is_empty())
            .then(|| {
                view! {
                    <h3>"Top Courses"</h3>
                    <div class="tags">
                        {college.courses.iter().map(|c| view! { <span class="tag">{c.clone()}</span> }).collect_view()}
                    </div>
                }
            })}
        {college.placements.map(|text| view! { <h3>"Placements"</h3> <p>{text}</p> })}
        {college
            .website_url
            .map(|href| view! { <a class="btn btn--ghost" href=href target="_blank" rel="noreferrer">"Visit Website"</a> })}
    }
}
