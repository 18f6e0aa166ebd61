//! Administrator screens. Every page here renders inside an admin-only
//! [`AppShell`](crate::components::shell::AppShell).

pub mod blog;
pub mod careers;
pub mod catalog;
pub mod colleges;
pub mod dashboard;
pub mod editor;
pub mod scholarships;
pub mod submissions;
pub mod users;
pub mod webinars;
