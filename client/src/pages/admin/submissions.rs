//! Contact submission triage.

use leptos::prelude::*;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{Submission, SubmissionStatus};
use crate::state::auth::SessionHandle;
use crate::state::remote::{restore_at, take_where};
use crate::util::dialog::confirm;
use crate::util::format::optional_date;
use crate::util::remote::{Remote, use_remote};

fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::New => "badge badge--new",
        SubmissionStatus::Contacted => "badge badge--contacted",
        SubmissionStatus::Resolved => "badge badge--resolved",
    }
}

#[component]
pub fn AdminSubmissionsPage() -> impl IntoView {
    view! {
        <AppShell admin=true>
            <AdminSubmissionsContent/>
        </AppShell>
    }
}

#[component]
fn AdminSubmissionsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let error = RwSignal::new(None::<String>);
    let submissions = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::list_submissions(&client).await })
    });

    view! {
        <section class="page admin-submissions">
            <h1>"Contact & Demo Submissions"</h1>
            <ActionError error/>
            {remote_view(
                submissions,
                move |rows: Vec<Submission>| {
                    if rows.is_empty() {
                        return view! { <p class="empty">"No submissions yet."</p> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Type"</th>
                                    <th>"Message"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|submission| view! { <SubmissionRow submission submissions error/> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                },
            )}
        </section>
    }
}

#[component]
fn SubmissionRow(
    submission: Submission,
    submissions: Remote<Vec<Submission>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let id = submission.id.clone();

    let on_status = {
        let id = id.clone();
        move |ev: leptos::ev::Event| {
            let Some(status) = SubmissionStatus::parse(&event_target_value(&ev)) else {
                return;
            };
            submissions.edit(|rows| {
                if let Some(row) = rows.iter_mut().find(|s| s.id == id) {
                    row.status = status;
                }
            });
            let client = session.client_untracked();
            let id = id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if let Err(e) = endpoints::set_submission_status(&client, &id, status).await {
                    log::warn!("status update for submission {id} failed: {e}");
                    error.set(Some("Failed to update status.".to_owned()));
                    submissions.refetch();
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (client, id);
        }
    };

    let on_delete = move |_| {
        if !confirm("Are you sure you want to delete this submission?") {
            return;
        }
        let mut removed = None;
        submissions.edit(|rows| removed = take_where(rows, |s| s.id == id));
        let Some((index, row)) = removed else {
            return;
        };
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = endpoints::delete_submission(&client, &row.id).await {
                log::warn!("delete submission {} failed: {e}", row.id);
                submissions.edit(|rows| restore_at(rows, index, row));
                error.set(Some("Failed to delete submission.".to_owned()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, index, row);
    };

    let status = submission.status;
    view! {
        <tr>
            <td>{optional_date(submission.created_at.as_deref())}</td>
            <td class="table__strong">{submission.name}</td>
            <td>
                <a href=format!("mailto:{}", submission.email)>{submission.email.clone()}</a>
            </td>
            <td>{submission.submission_type.unwrap_or_default()}</td>
            <td class="table__message">{submission.message}</td>
            <td>
                <select class=status_class(status) prop:value=status.label() on:change=on_status>
                    {SubmissionStatus::ALL
                        .iter()
                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="table__actions">
                <button class="link link--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
