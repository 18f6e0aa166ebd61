#![recursion_limit = "256"]

//! # learnx-client
//!
//! Leptos + WASM frontend for the Learn-x-AI career guidance application.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the career guidance backend. The session store in
//! [`state::session`] is the only piece of client logic with a contract of its
//! own; everything else is a view bound to a fetch.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
