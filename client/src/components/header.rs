//! Top bar with sidebar toggle, page title, and the user menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::SessionHandle;
use crate::state::ui::UiState;
use crate::util::nav::page_title;
use crate::util::storage::LocalStorage;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let on_toggle = move |_| {
        let next = ui.get_untracked().toggled_sidebar();
        ui.set(next);
        next.save(&LocalStorage);
    };

    // The page guard sends the now-anonymous user to /login.
    let on_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    let title = move || location.pathname.with(|path| page_title(path));
    let user_name = move || session.session().map_or_else(|| "User".to_owned(), |s| s.name().to_owned());

    view! {
        <header class="header">
            <button class="header__toggle" on:click=on_toggle title="Toggle sidebar">
                "☰"
            </button>
            <h1 class="header__title">{title}</h1>
            <div class="header__user">
                <button class="header__user-button" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    {user_name}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__menu">
                        <a href="/my-profile" on:click=move |_| menu_open.set(false)>
                            "My Profile"
                        </a>
                        <button class="header__menu-logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
