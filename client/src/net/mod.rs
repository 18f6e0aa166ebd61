//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and error classification, `endpoints`
//! names every backend call with typed inputs and outputs, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod endpoints;
pub mod types;
