//! Authenticated page frame: sidebar, header, and a guarded content area.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::{Access, AccessDecision, SessionHandle};
use crate::state::ui::UiState;
use crate::util::auth::install_access_guard;

/// Wraps a page in the navigation chrome and renders it only once the
/// session satisfies `access`. Failing sessions are redirected.
#[component]
pub fn AppShell(#[prop(optional)] admin: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let access = if admin { Access::Admin } else { Access::SignedIn };

    install_access_guard(session, access, use_navigate());

    let granted = move || session.access(access) == AccessDecision::Granted;

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || !ui.get().sidebar_open>
            <Sidebar/>
            <div class="app-shell__main">
                <Header/>
                <main class="app-shell__content">
                    <Show
                        when=granted
                        fallback=|| view! { <p class="status status--loading">"Checking your session…"</p> }
                    >
                        {children()}
                    </Show>
                </main>
            </div>
        </div>
    }
}
