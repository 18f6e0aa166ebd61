//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages apply identical redirect behavior: anonymous users go to
//! `/login`, non-admins are bounced off admin routes, and signed-in users
//! skip the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{Access, AccessDecision, SessionHandle};

/// Redirect whenever the session stops satisfying `requirement`.
pub fn install_access_guard<F>(session: SessionHandle, requirement: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let AccessDecision::Redirect(path) = session.access(requirement) {
            navigate(path, replace());
        }
    });
}

/// Send an already signed-in user from the login page to the dashboard.
pub fn install_signed_in_redirect<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = signed_in_redirect(session.is_restored(), session.session().is_some()) {
            navigate(target, replace());
        }
    });
}

/// Where the login page should send the user, if anywhere.
pub fn signed_in_redirect(restored: bool, signed_in: bool) -> Option<&'static str> {
    (restored && signed_in).then_some("/dashboard")
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
