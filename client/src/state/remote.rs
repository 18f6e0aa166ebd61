//! Fetch state shared by every data-backed page.
//!
//! DESIGN
//! ======
//! Pages never juggle separate loading/error/data flags. A fetch is one
//! [`RemoteStatus`] value that moves `Idle -> Loading -> Ready | Failed`;
//! the reactive driver lives in `util::remote`.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::api::ApiError;

/// Lifecycle of one remote fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteStatus<T> {
    /// Nothing requested yet (server render, or waiting on a guard).
    Idle,
    Loading,
    Ready(T),
    /// Failed with a user-facing message. `reauth` is set when the backend
    /// rejected the session token.
    Failed { message: String, reauth: bool },
}

impl<T> Default for RemoteStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RemoteStatus<T> {
    /// Settle a finished fetch.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed { message: e.user_message(), reauth: e.is_unauthorized() },
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether signing in again could fix the failure.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Failed { reauth: true, .. })
    }

    /// Apply `edit` to ready data; other states are left alone.
    ///
    /// Returns whether anything was edited.
    pub fn edit(&mut self, edit: impl FnOnce(&mut T)) -> bool {
        match self {
            Self::Ready(data) => {
                edit(data);
                true
            }
            _ => false,
        }
    }
}

/// Monotonic request counter. Only the most recently issued ticket may
/// settle a fetch; results carrying older tickets are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Remove the first element matching `is_target`, returning it with its index
/// so a failed server call can put it back.
pub fn take_where<T>(items: &mut Vec<T>, is_target: impl Fn(&T) -> bool) -> Option<(usize, T)> {
    let index = items.iter().position(is_target)?;
    Some((index, items.remove(index)))
}

/// Undo [`take_where`], clamping the index if the list shrank meanwhile.
pub fn restore_at<T>(items: &mut Vec<T>, index: usize, item: T) {
    let index = index.min(items.len());
    items.insert(index, item);
}
