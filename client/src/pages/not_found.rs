//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::components::public_header::PublicHeader;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="public-page not-found">
            <PublicHeader/>
            <section class="hero">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist or has moved."</p>
                <a class="btn btn--primary" href="/">
                    "Back to home"
                </a>
            </section>
        </div>
    }
}
