//! Bookmark button posting to the saved-items endpoint.

use leptos::prelude::*;

use crate::net::endpoints;
use crate::net::types::SaveTarget;
use crate::state::auth::SessionHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed,
}

#[component]
pub fn SaveButton(target: SaveTarget) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let state = RwSignal::new(SaveState::Idle);

    let on_click = move |_| {
        if matches!(state.get_untracked(), SaveState::Saving | SaveState::Saved) {
            return;
        }
        state.set(SaveState::Saving);
        let client = session.client_untracked();
        let target = target.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match endpoints::save_item(&client, &target).await {
                Ok(_) => state.set(SaveState::Saved),
                Err(e) => {
                    log::warn!("save {} failed: {e}", target.item_id);
                    state.set(SaveState::Failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, target);
    };

    view! {
        <button class="btn btn--ghost save-button" on:click=on_click>
            {move || match state.get() {
                SaveState::Idle => "☆ Save",
                SaveState::Saving => "Saving…",
                SaveState::Saved => "★ Saved",
                SaveState::Failed => "Save failed, retry",
            }}
        </button>
    }
}
