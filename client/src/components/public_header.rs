//! Top bar for pages reachable without signing in.

use leptos::prelude::*;

use crate::state::auth::SessionHandle;

#[component]
pub fn PublicHeader() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let signed_in = move || session.session().is_some();
    view! {
        <header class="public-header">
            <a class="public-header__brand" href="/">
                "Learn-x-AI"
            </a>
            <nav class="public-header__nav">
                <a href="/support">"Support"</a>
                <Show
                    when=signed_in
                    fallback=|| view! { <a class="btn btn--primary" href="/login">"Get Started"</a> }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </Show>
            </nav>
        </header>
    }
}
