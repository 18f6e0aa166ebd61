//! Client-side state: the session, remote fetch status, and UI chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the contract-bearing store, `auth` wraps it in a reactive
//! handle provided through context, `remote` models one fetch, and `ui`
//! holds persisted shell preferences.

pub mod auth;
pub mod remote;
pub mod session;
pub mod ui;
