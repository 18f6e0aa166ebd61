//! Upcoming and past webinars.

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{Webinar, WebinarStatus};
use crate::state::auth::SessionHandle;
use crate::util::format::optional_date;
use crate::util::remote::use_remote;

#[component]
pub fn WebinarsPage() -> impl IntoView {
    view! {
        <AppShell>
            <WebinarsContent/>
        </AppShell>
    }
}

#[component]
fn WebinarsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let webinars = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::list_webinars(&client).await })
    });

    view! {
        <section class="page webinars">
            <h1>"Live Webinars & Q&A Sessions"</h1>
            {remote_view(
                webinars,
                |all: Vec<Webinar>| {
                    let (upcoming, past): (Vec<_>, Vec<_>) =
                        all.into_iter().partition(|w| w.status == WebinarStatus::Upcoming);
                    view! {
                        <WebinarSection title="Upcoming Sessions" empty="No upcoming webinars scheduled." items=upcoming/>
                        <WebinarSection title="Past Sessions" empty="No past webinars available." items=past/>
                    }
                },
            )}
        </section>
    }
}

#[component]
fn WebinarSection(title: &'static str, empty: &'static str, items: Vec<Webinar>) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <p class="empty">{empty}</p> }.into_any()
    } else {
        items.into_iter().map(|webinar| view! { <WebinarCard webinar/> }).collect_view().into_any()
    };
    view! {
        <section class="webinars__section">
            <h2>{title}</h2>
            <div class="stack">{body}</div>
        </section>
    }
}

#[component]
fn WebinarCard(webinar: Webinar) -> impl IntoView {
    let past = webinar.status == WebinarStatus::Past;
    let action = if past { "Watch Recording" } else { "Register Now" };
    let speaker = webinar.speaker.clone().map(|s| format!("with {s}")).unwrap_or_default();
    let href = webinar.action_link().to_owned();
    view! {
        <div class="card webinar-card">
            {webinar.image.map(|src| view! { <img class="webinar-card__avatar" src=src alt=""/> })}
            <div class="webinar-card__body">
                <h3>{webinar.title}</h3>
                <p class="card__meta">{speaker} " " {optional_date(webinar.date.as_deref())}</p>
                <p>{webinar.description.unwrap_or_default()}</p>
                <a class="btn" class:btn--primary=!past href=href target="_blank" rel="noreferrer">
                    {action}
                </a>
            </div>
        </div>
    }
}
