//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches through
//! `util::remote`, actions through `net::endpoints`) and delegates chrome and
//! status rendering to `components`. Decision logic that does not need the
//! DOM lives in plain functions next to the page and is unit tested there.

pub mod admin;
pub mod ai_chatbot;
pub mod ai_tools;
pub mod assessments;
pub mod blog;
pub mod blog_post;
pub mod career_matches;
pub mod college_details;
pub mod community;
pub mod dashboard;
pub mod explore_colleges;
pub mod landing;
pub mod login;
pub mod my_profile;
pub mod not_found;
pub mod resource_library;
pub mod saved_items;
pub mod settings;
pub mod support;
pub mod webinars;
