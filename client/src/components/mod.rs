//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and the shared building blocks
//! (fetch status, stat tiles, admin form modal) while reading session and UI
//! state from Leptos context providers.

pub mod form_modal;
pub mod header;
pub mod public_header;
pub mod remote_view;
pub mod save_button;
pub mod shell;
pub mod sidebar;
pub mod stat_card;
