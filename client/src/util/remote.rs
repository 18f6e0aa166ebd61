//! Reactive driver for [`RemoteStatus`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data-backed page calls [`use_remote`] with a fetch closure. The
//! closure is re-run whenever the signals it reads change (filters, the
//! session token) or when [`Remote::refetch`] is called. Each run takes a new
//! ticket from a [`RequestSequence`]; a response arriving after a newer run
//! started is discarded, so slow responses never overwrite fresh state.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::remote::{RemoteStatus, RequestSequence};

/// Handle to one page-level fetch.
pub struct Remote<T: Send + Sync + 'static> {
    status: RwSignal<RemoteStatus<T>>,
    trigger: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

impl<T: Clone + Send + Sync + 'static> Remote<T> {
    /// Current status (tracked).
    pub fn status(self) -> RemoteStatus<T> {
        self.status.get()
    }

    /// Ready data, if any (tracked).
    pub fn data(self) -> Option<T> {
        self.status.with(|status| status.data().cloned())
    }
}

impl<T: Send + Sync + 'static> Remote<T> {
    /// Run the fetch again.
    pub fn refetch(self) {
        self.trigger.update(|n| *n = n.wrapping_add(1));
    }

    /// Edit ready data in place (optimistic updates). Returns whether the
    /// data was ready.
    pub fn edit(self, edit: impl FnOnce(&mut T)) -> bool {
        let mut edited = false;
        self.status.update(|status| edited = status.edit(edit));
        edited
    }
}

/// Drive `fetch` reactively.
///
/// `fetch` returns `None` while its inputs are not ready (for example before
/// the session is restored); the status then stays [`RemoteStatus::Idle`].
pub fn use_remote<T, F, Fut>(fetch: F) -> Remote<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let status = RwSignal::new(RemoteStatus::Idle);
    let trigger = RwSignal::new(0_u64);
    let sequence = StoredValue::new(RequestSequence::default());

    Effect::new(move || {
        trigger.track();
        let Some(request) = fetch() else {
            status.set(RemoteStatus::Idle);
            return;
        };
        let mut ticket = 0;
        sequence.update_value(|seq| ticket = seq.issue());
        status.set(RemoteStatus::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            if sequence.try_with_value(|seq| seq.is_current(ticket)) == Some(true) {
                let _ = status.try_set(RemoteStatus::from_result(result));
            } else {
                log::debug!("dropping superseded response (ticket {ticket})");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, ticket);
        }
    });

    Remote { status, trigger }
}
