//! Career matches with search, sort, and cluster filters.

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::save_button::SaveButton;
use crate::components::shell::AppShell;
use crate::net::endpoints::{self, CAREER_CLUSTERS, CareerFilter, CareerSort};
use crate::net::types::{Career, SaveTarget, SavedKind};
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

#[component]
pub fn CareerMatchesPage() -> impl IntoView {
    view! {
        <AppShell>
            <CareerMatchesContent/>
        </AppShell>
    }
}

#[component]
fn CareerMatchesContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(CareerSort::default());
    let cluster = RwSignal::new(CAREER_CLUSTERS[0].to_owned());

    let careers = use_remote(move || {
        let client = session.signed_in_client()?;
        let filter = CareerFilter { cluster: cluster.get(), search: search.get(), sort: sort.get() };
        Some(async move { endpoints::list_careers(&client, &filter).await })
    });

    view! {
        <section class="page careers">
            <h1>"Your Career Matches"</h1>
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search careers…"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    prop:value=move || sort.get().as_str()
                    on:change=move |ev| sort.set(CareerSort::parse(&event_target_value(&ev)))
                >
                    {CareerSort::ALL
                        .iter()
                        .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="chips">
                {CAREER_CLUSTERS
                    .iter()
                    .map(|name| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || cluster.with(|c| c == name)
                                on:click=move |_| cluster.set((*name).to_owned())
                            >
                                {*name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {remote_view(
                careers,
                |items: Vec<Career>| {
                    if items.is_empty() {
                        return view! { <p class="empty">"No careers match these filters."</p> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {items.into_iter().map(|career| view! { <CareerCard career/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                },
            )}
        </section>
    }
}

#[component]
fn CareerCard(career: Career) -> impl IntoView {
    let target = SaveTarget { item_id: career.id.clone(), item_type: SavedKind::Career };
    view! {
        <div class="card career-card">
            <div class="card__header">
                <h3>{career.name}</h3>
                {career.match_score.map(|score| view! { <span class="badge badge--match">{format!("{score}% match")}</span> })}
            </div>
            <p>{career.rationale.unwrap_or_default()}</p>
            <dl class="facts">
                <dt>"Salary"</dt>
                <dd>{career.salary.unwrap_or_else(|| "—".to_owned())}</dd>
                <dt>"Growth"</dt>
                <dd>{career.growth.unwrap_or_else(|| "—".to_owned())}</dd>
            </dl>
            <div class="tags">
                {career.traits.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
            </div>
            <SaveButton target/>
        </div>
    }
}
