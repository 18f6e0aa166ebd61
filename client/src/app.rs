//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::admin::{
    blog::AdminBlogPage, careers::AdminCareersPage, colleges::AdminCollegesPage, dashboard::AdminDashboardPage,
    scholarships::AdminScholarshipsPage, submissions::AdminSubmissionsPage, users::AdminUsersPage,
    webinars::AdminWebinarsPage,
};
use crate::pages::{
    ai_chatbot::AiChatbotPage, ai_tools::AiToolsPage, assessments::AssessmentsPage, blog::BlogPage,
    blog_post::BlogPostPage, career_matches::CareerMatchesPage, college_details::CollegeDetailsPage,
    community::CommunityPage, dashboard::DashboardPage, explore_colleges::ExploreCollegesPage, landing::LandingPage,
    login::LoginPage, my_profile::MyProfilePage, not_found::NotFoundPage, resource_library::ResourceLibraryPage,
    saved_items::SavedItemsPage, settings::SettingsPage, support::SupportPage, webinars::WebinarsPage,
};
use crate::state::auth::SessionHandle;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session handle and UI state once, provides them to every
/// page, and restores persisted state after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, where localStorage exists.
    Effect::new(move || {
        session.restore();
        ui.set(UiState::load(&crate::util::storage::LocalStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/learnx.css"/>
        <Title text="Learn-x-AI"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("support") view=SupportPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("my-profile") view=MyProfilePage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("assessments") view=AssessmentsPage/>
                <Route path=StaticSegment("career-matches") view=CareerMatchesPage/>
                <Route path=StaticSegment("explore-colleges") view=ExploreCollegesPage/>
                <Route path=(StaticSegment("colleges"), ParamSegment("id")) view=CollegeDetailsPage/>
                <Route path=StaticSegment("saved-items") view=SavedItemsPage/>
                <Route path=StaticSegment("resource-library") view=ResourceLibraryPage/>
                <Route path=StaticSegment("ai-chatbot") view=AiChatbotPage/>
                <Route path=StaticSegment("ai-tools") view=AiToolsPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPostPage/>
                <Route path=StaticSegment("webinars") view=WebinarsPage/>
                <Route path=StaticSegment("community") view=CommunityPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("colleges")) view=AdminCollegesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("careers")) view=AdminCareersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("scholarships")) view=AdminScholarshipsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("blog")) view=AdminBlogPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("webinars")) view=AdminWebinarsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("submissions")) view=AdminSubmissionsPage/>
            </Routes>
        </Router>
    }
}
