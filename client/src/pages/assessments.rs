//! Assessments grouped by type, with start/continue actions.

#[cfg(test)]
#[path = "assessments_test.rs"]
mod assessments_test;

use leptos::prelude::*;
use rand::Rng;

use crate::components::remote_view::{ActionError, remote_view};
use crate::components::shell::AppShell;
use crate::net::endpoints;
use crate::net::types::{Assessment, AssessmentStatus};
use crate::state::auth::SessionHandle;
use crate::util::remote::{Remote, use_remote};

/// Page sections and the assessment types each one lists, in order.
const SECTIONS: [(&str, &[&str]); 3] = [
    ("Aptitude Tests", &["Aptitude"]),
    ("Interest & Personality", &["Interest", "Personality"]),
    ("Values Clarification", &["Values"]),
];

/// Split assessments into the page sections. Types not listed in any section
/// are not shown.
fn group_assessments(assessments: &[Assessment]) -> Vec<(&'static str, Vec<Assessment>)> {
    SECTIONS
        .iter()
        .map(|(title, types)| {
            let members = types
                .iter()
                .flat_map(|kind| assessments.iter().filter(move |a| a.assessment_type == *kind))
                .cloned()
                .collect();
            (*title, members)
        })
        .collect()
}

/// Action button label, or `None` once completed.
fn action_label(status: AssessmentStatus) -> Option<&'static str> {
    match status {
        AssessmentStatus::Pending => Some("Start Test"),
        AssessmentStatus::InProgress => Some("Continue Test"),
        AssessmentStatus::Completed => None,
    }
}

/// Scores recorded when a test is marked complete.
const SCORE_RANGE: std::ops::Range<u32> = 70..100;

/// Stand-in score for a completed test, drawn from [`SCORE_RANGE`].
fn placeholder_score(rng: &mut impl Rng) -> u32 {
    rng.random_range(SCORE_RANGE)
}

#[component]
pub fn AssessmentsPage() -> impl IntoView {
    view! {
        <AppShell>
            <AssessmentsContent/>
        </AppShell>
    }
}

#[component]
fn AssessmentsContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let error = RwSignal::new(None::<String>);
    let assessments = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::list_assessments(&client).await })
    });

    view! {
        <section class="page assessments">
            <h1>"Unlock Your Potential"</h1>
            <p class="page__subtitle">
                "Complete these assessments to build your career profile and unlock tailored recommendations."
            </p>
            <ActionError error/>
            {remote_view(
                assessments,
                move |items: Vec<Assessment>| {
                    group_assessments(&items)
                        .into_iter()
                        .map(|(title, members)| {
                            view! {
                                <section class="assessments__group">
                                    <h2>{title}</h2>
                                    <div class="card-grid">
                                        {members
                                            .into_iter()
                                            .map(|assessment| view! { <AssessmentCard assessment assessments error/> })
                                            .collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()
                },
            )}
        </section>
    }
}

#[component]
fn AssessmentCard(
    assessment: Assessment,
    assessments: Remote<Vec<Assessment>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let id = assessment.id.clone();
    let progress = assessment.progress.unwrap_or(0).min(100);

    let on_take = move |_| {
        let client = session.client_untracked();
        let id = id.clone();
        let score = placeholder_score(&mut rand::rng());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match endpoints::update_assessment(&client, &id, AssessmentStatus::Completed, score).await {
                Ok(_) => assessments.refetch(),
                Err(e) => error.set(Some(format!("Failed to update assessment status. {}", e.user_message()))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, score, assessments, error);
    };

    view! {
        <div class="card assessment-card">
            <div class="card__header">
                <h3>{assessment.assessment_name.clone()}</h3>
                <span class=format!("badge badge--{}", assessment.status.label().to_lowercase().replace(' ', "-"))>
                    {assessment.status.label()}
                </span>
            </div>
            <p>{assessment.description.clone().unwrap_or_default()}</p>
            {(assessment.status == AssessmentStatus::InProgress)
                .then(|| {
                    view! {
                        <div class="progress">
                            <div class="progress__bar" style=format!("width: {progress}%")></div>
                        </div>
                    }
                })}
            {match action_label(assessment.status) {
                Some(label) => view! { <button class="btn btn--primary" on:click=on_take>{label}</button> }.into_any(),
                None => view! { <span class="assessment-card__done">"Completed ✓"</span> }.into_any(),
            }}
        </div>
    }
}
