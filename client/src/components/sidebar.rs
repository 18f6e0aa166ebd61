//! Left navigation: main links, admin links for admins, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::SessionHandle;
use crate::util::nav::{MAIN_LINKS, NavLink, admin_links, is_active};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/dashboard">
                "Learn-x-AI"
            </a>
            <nav class="sidebar__nav">
                {MAIN_LINKS.iter().map(|link| view! { <SidebarLink link=*link/> }).collect_view()}
                {move || {
                    let links = admin_links(session.is_admin());
                    (!links.is_empty())
                        .then(|| {
                            view! {
                                <p class="sidebar__section">"Admin Panel"</p>
                                {links.iter().map(|link| view! { <SidebarLink link=*link/> }).collect_view()}
                            }
                        })
                }}
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                <span class="sidebar__icon">"🚪"</span>
                <span>"Logout"</span>
            </button>
        </aside>
    }
}

#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.with(|path| is_active(link.path, path));

    view! {
        <a class="sidebar__link" class:sidebar__link--active=active href=link.path>
            <span class="sidebar__icon">{link.icon}</span>
            <span>{link.label}</span>
        </a>
    }
}
