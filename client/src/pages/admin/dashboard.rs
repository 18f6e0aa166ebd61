//! Admin landing page with platform totals.

use leptos::prelude::*;

use crate::components::remote_view::remote_view;
use crate::components::shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::net::endpoints;
use crate::net::types::AdminStats;
use crate::state::auth::SessionHandle;
use crate::util::remote::use_remote;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AppShell admin=true>
            <AdminDashboardContent/>
        </AppShell>
    }
}

#[component]
fn AdminDashboardContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let stats = use_remote(move || {
        let client = session.signed_in_client()?;
        Some(async move { endpoints::admin_stats(&client).await })
    });

    view! {
        <section class="page admin-dashboard">
            <h1>"Welcome, Admin!"</h1>
            {remote_view(
                stats,
                |stats: AdminStats| {
                    view! {
                        <div class="stat-grid">
                            <StatCard label="Total Users" value=stats.users.to_string() icon="👥" href="/admin/users"/>
                            <StatCard
                                label="Total Colleges"
                                value=stats.colleges.to_string()
                                icon="🏛️"
                                href="/admin/colleges"
                            />
                            <StatCard
                                label="Total Careers"
                                value=stats.careers.to_string()
                                icon="💼"
                                href="/admin/careers"
                            />
                            <StatCard
                                label="Total Scholarships"
                                value=stats.scholarships.to_string()
                                icon="🏆"
                                href="/admin/scholarships"
                            />
                            <StatCard
                                label="New Submissions"
                                value=stats.new_submissions.to_string()
                                icon="📨"
                                href="/admin/submissions"
                            />
                        </div>
                    }
                },
            )}
        </section>
    }
}
