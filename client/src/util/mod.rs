//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod dialog;
pub mod form;
pub mod format;
pub mod nav;
pub mod remote;
pub mod storage;
