//! Student dashboard: progress tiles and recent saved activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Loads `GET /api/users/dashboard` once the
//! session is available and greets the user by first name.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::net::endpoints;
use crate::net::types::{ActivityItem, AssessmentProgress, DashboardSummary};
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "College" => "🏛️",
        "Career" => "💼",
        "Resource" => "📚",
        _ => "⭐",
    }
}

fn assessment_ratio(progress: &AssessmentProgress) -> String {
    format!("{}/{}", progress.completed, progress.total)
}

/// Roadmap progress as a CSS width, clamped to 0-100%.
fn progress_width(percent: u32) -> String {
    format!("width: {}%", percent.min(100))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <DashboardContent/>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let summary = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::dashboard(&client).await })
    });

    let first_name = move || session.session().map(|s| s.first_name().to_owned()).unwrap_or_default();

    view! {
        <section class="page dashboard">
            <h1>"Welcome back, " {first_name} "! 👋"</h1>
            <p class="page__subtitle">"Let's continue your journey to career clarity."</p>
            <div class="callout">
                <h2>"Your Next Step"</h2>
                <p>"Complete your remaining assessments to unlock a personalized career roadmap."</p>
                <a class="btn btn--primary" href="/assessments">
                    "Go to Assessments"
                </a>
            </div>
            {remote_view(summary, |data: DashboardSummary| view! { <SummaryView data/> })}
        </section>
    }
}

#[component]
fn SummaryView(data: DashboardSummary) -> impl IntoView {
    let activity = data.recent_activity;
    view! {
        <div class="stat-grid">
            <StatCard label="Assessments" value=assessment_ratio(&data.assessments) icon="📝"/>
            <StatCard label="Career Matches" value=data.career_matches_unlocked.to_string() icon="💼"/>
            <div class="stat-card">
                <p class="stat-card__label">"Roadmap Progress"</p>
                <p class="stat-card__value">{format!("{}%", data.roadmap_progress.min(100))}</p>
                <div class="progress">
                    <div class="progress__bar" style=progress_width(data.roadmap_progress)></div>
                </div>
            </div>
        </div>
        <div class="panel">
            <h3>"Recent Activity"</h3>
            {if activity.is_empty() {
                view! { <p class="empty">"Your recent saved items will appear here."</p> }.into_any()
            } else {
                activity.into_iter().map(|item| view! { <ActivityRow item/> }).collect_view().into_any()
            }}
        </div>
    }
}

#[component]
fn ActivityRow(item: ActivityItem) -> impl IntoView {
    view! {
        <div class="activity">
            <span class="activity__icon">{activity_icon(&item.kind)}</span>
            <div>
                <p class="activity__kind">{format!("You saved a {}", item.kind)}</p>
                <p class="activity__label">{item.label().to_owned()}</p>
            </div>
        </div>
    }
}
