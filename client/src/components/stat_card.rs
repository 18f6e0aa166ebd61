//! Summary tile used on both dashboards.

use leptos::prelude::*;

/// Labelled number; with `href` the whole tile links to the matching screen.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        {icon.map(|icon| view! { <span class="stat-card__icon">{icon}</span> })}
        <p class="stat-card__label">{label}</p>
        <p class="stat-card__value">{value}</p>
    };
    match href {
        Some(href) => view! { <a class="stat-card stat-card--link" href=href>{body}</a> }.into_any(),
        None => view! { <div class="stat-card">{body}</div> }.into_any(),
    }
}
