//! Uniform rendering of a [`Remote`] fetch: loading, failure, or content.

use leptos::prelude::*;

use crate::state::auth::SessionHandle;
use crate::state::remote::RemoteStatus;
use crate::util::remote::Remote;

/// Render `remote`, handing ready data to `render`.
///
/// A fetch rejected for an expired or invalid token offers to sign in again;
/// logging out hands the user to the page guard, which redirects to `/login`.
pub fn remote_view<T, V>(remote: Remote<T>, render: impl Fn(T) -> V + Send + Sync + 'static) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = expect_context::<SessionHandle>();
    move || match remote.status() {
        RemoteStatus::Idle | RemoteStatus::Loading => {
            view! { <p class="status status--loading">"Loading…"</p> }.into_any()
        }
        RemoteStatus::Ready(data) => render(data).into_any(),
        failed => {
            let message = failed.error().unwrap_or_default().to_owned();
            if !failed.needs_login() {
                return view! { <p class="status status--error">{message}</p> }.into_any();
            }
            view! {
                <div class="status status--error">
                    <p>{message}</p>
                    <button class="btn btn--primary" on:click=move |_| session.logout()>
                        "Log in again"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

/// Inline error line shown above content after a failed action.
#[component]
pub fn ActionError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="status status--error" on:click=move |_| error.set(None)>
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
