//! User management: promote, demote, and delete accounts.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::UserSummary;
use crate::state::auth::SessionHandle;
use crate::state::remote::{restore_at, take_where};
use crate::util::dialog::confirm;
use crate::util::remote::{Remote, use_remote};

/// Row action an admin can take on an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    ToggleAdmin,
    Delete,
}

impl UserAction {
    fn refused_on_self(self) -> &'static str {
        match self {
            Self::ToggleAdmin => "You cannot remove your own admin status.",
            Self::Delete => "You cannot delete your own admin account.",
        }
    }
}

/// Admins may not demote or delete themselves.
///
/// # Errors
///
/// Returns the message to show when `target_id` is the signed-in admin.
pub fn check_user_action(action: UserAction, target_id: &str, self_id: &str) -> Result<(), &'static str> {
    if !self_id.is_empty() && target_id == self_id {
        return Err(action.refused_on_self());
    }
    Ok(())
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AppShell admin=true>
            <AdminUsersContent/>
        </AppShell>
    }
}

#[component]
fn AdminUsersContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let error = RwSignal::new(None::<String>);
    let users = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::list_users(&client).await })
    });

    view! {
        <section class="page admin-users">
            <h1>"User Management"</h1>
            <ActionError error/>
            {remote_view(
                users,
                move |rows: Vec<UserSummary>| {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Admin Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|user| view! { <UserRow user users error/> }).collect_view()}
                            </tbody>
                        </table>
                    }
                },
            )}
        </section>
    }
}

#[component]
fn UserRow(user: UserSummary, users: Remote<Vec<UserSummary>>, error: RwSignal<Option<String>>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let self_id = move || session.session_untracked().map(|s| s.id().to_owned()).unwrap_or_default();

    let on_toggle = {
        let user = user.clone();
        move |_| {
            if !confirm(&format!("Are you sure you want to change the admin status for {}?", user.name)) {
                return;
            }
            if let Err(message) = check_user_action(UserAction::ToggleAdmin, &user.id, &self_id()) {
                error.set(Some(message.to_owned()));
                return;
            }
            let client = session.client_untracked();
            let user = user.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match endpoints::set_user_admin(&client, &user, !user.is_admin).await {
                    Ok(_) => users.refetch(),
                    Err(e) => {
                        log::warn!("role update for {} failed: {e}", user.id);
                        error.set(Some("Failed to update user role.".to_owned()));
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (client, user);
        }
    };

    let on_delete = {
        let id = user.id.clone();
        move |_| {
            if !confirm("Are you sure you want to permanently delete this user?") {
                return;
            }
            if let Err(message) = check_user_action(UserAction::Delete, &id, &self_id()) {
                error.set(Some(message.to_owned()));
                return;
            }
            let mut removed = None;
            users.edit(|rows| removed = take_where(rows, |u| u.id == id));
            let Some((index, row)) = removed else {
                return;
            };
            let client = session.client_untracked();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if let Err(e) = endpoints::delete_user(&client, &row.id).await {
                    log::warn!("delete user {} failed: {e}", row.id);
                    users.edit(|rows| restore_at(rows, index, row));
                    error.set(Some("Failed to delete user.".to_owned()));
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (client, index, row);
        }
    };

    let role = if user.is_admin {
        view! { <span class="badge badge--admin">"Admin"</span> }.into_any()
    } else {
        "User".into_any()
    };
    view! {
        <tr>
            <td class="table__strong">{user.name.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>{role}</td>
            <td class="table__actions">
                <button class="link" on:click=on_toggle>
                    {if user.is_admin { "Remove Admin" } else { "Make Admin" }}
                </button>
                <button class="link link--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
