//! Typed calls for every backend endpoint the pages use.
//!
//! Each function takes the [`ApiClient`] built from the current session, so
//! the bearer token is the one active at call time. Filters that travel as
//! query parameters are plain values with a `query()` builder.
//!
//! Every call fails with [`ApiError`] as classified by [`ApiClient`].

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::{Map, Value};

use super::api::{ApiClient, ApiError};
use super::types::{
    Ack, AdminStats, Assessment, AssessmentStatus, BlogPost, Career, ChatMessage, College, Comment, ContactRequest,
    DashboardSummary, Discussion, NewDiscussion, Resource, SaveTarget, SavedItems, Scholarship, SolutionStep,
    Submission, SubmissionStatus, UserSummary, Webinar,
};
use crate::state::session::{AuthRequest, Authenticator, Session};

impl Authenticator for ApiClient {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, ApiError> {
        self.post(request.path(), &request.payload()).await
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// Ordering for the career matches list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CareerSort {
    #[default]
    Match,
    Salary,
    Growth,
}

impl CareerSort {
    pub const ALL: [Self; 3] = [Self::Match, Self::Salary, Self::Growth];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Salary => "salary",
            Self::Growth => "growth",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Match => "Sort by Best Match",
            Self::Salary => "Sort by Highest Salary",
            Self::Growth => "Sort by Fastest Growth",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|sort| sort.as_str() == raw).unwrap_or_default()
    }
}

/// Career clusters offered as filter chips.
pub const CAREER_CLUSTERS: [&str; 5] = ["All", "Technology", "Healthcare", "Creative", "Business"];

/// Career list filter. An empty or `"All"` cluster means no cluster filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CareerFilter {
    pub cluster: String,
    pub search: String,
    pub sort: CareerSort,
}

impl CareerFilter {
    /// Query parameters; every key is always sent, empty when unset.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cluster", optional_choice(&self.cluster, "All")),
            ("searchTerm", self.search.trim().to_owned()),
            ("sortBy", self.sort.as_str().to_owned()),
        ]
    }
}

/// Streams offered in the college browser.
pub const COLLEGE_STREAMS: [&str; 3] = ["Engineering", "Commerce", "Medical"];

/// College list filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollegeFilter {
    pub stream: String,
    pub location: String,
}

impl CollegeFilter {
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![("stream", self.stream.trim().to_owned()), ("location", self.location.trim().to_owned())]
    }
}

/// Category shown for "no category filter" in the community hub.
pub const ALL_DISCUSSIONS: &str = "All Discussions";

/// Categories a discussion can be filed under.
pub const DISCUSSION_CATEGORIES: [&str; 4] = ["Science", "Commerce", "Arts", "General"];

/// Discussion list filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscussionFilter {
    pub category: String,
}

impl Default for DiscussionFilter {
    fn default() -> Self {
        Self { category: ALL_DISCUSSIONS.to_owned() }
    }
}

impl DiscussionFilter {
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![("category", optional_choice(&self.category, ALL_DISCUSSIONS))]
    }
}

fn optional_choice(value: &str, any: &str) -> String {
    let value = value.trim();
    if value == any { String::new() } else { value.to_owned() }
}

// =============================================================================
// USERS
// =============================================================================

pub async fn dashboard(client: &ApiClient) -> Result<DashboardSummary, ApiError> {
    client.get("/users/dashboard").await
}

/// Save profile fields; returns the updated user record.
pub async fn update_my_profile(client: &ApiClient, fields: &Map<String, Value>) -> Result<Map<String, Value>, ApiError> {
    client.put("/users/my-profile", fields).await
}

pub async fn saved_items(client: &ApiClient) -> Result<SavedItems, ApiError> {
    client.get("/users/saved").await
}

pub async fn save_item(client: &ApiClient, target: &SaveTarget) -> Result<Value, ApiError> {
    client.post("/users/save", target).await
}

pub async fn unsave_item(client: &ApiClient, target: &SaveTarget) -> Result<(), ApiError> {
    client.delete_with("/users/save", target).await
}

pub async fn list_users(client: &ApiClient) -> Result<Vec<UserSummary>, ApiError> {
    client.get("/users").await
}

/// Flip a user's admin flag, sending the whole record back.
pub async fn set_user_admin(client: &ApiClient, user: &UserSummary, is_admin: bool) -> Result<Value, ApiError> {
    let updated = UserSummary { is_admin, ..user.clone() };
    client.put(&format!("/users/{}", user.id), &updated).await
}

pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/users/{id}")).await
}

// =============================================================================
// CATALOG
// =============================================================================

pub async fn list_assessments(client: &ApiClient) -> Result<Vec<Assessment>, ApiError> {
    client.get("/assessments").await
}

/// Record an assessment result and its new status.
pub async fn update_assessment(
    client: &ApiClient,
    id: &str,
    status: AssessmentStatus,
    score: u32,
) -> Result<Value, ApiError> {
    let body = serde_json::json!({ "status": status, "results": { "score": score } });
    client.put(&format!("/assessments/{id}"), &body).await
}

pub async fn list_careers(client: &ApiClient, filter: &CareerFilter) -> Result<Vec<Career>, ApiError> {
    client.get_query("/careers", &filter.query()).await
}

pub async fn create_career(client: &ApiClient, fields: &Map<String, Value>) -> Result<Career, ApiError> {
    client.post("/careers", fields).await
}

pub async fn update_career(client: &ApiClient, id: &str, fields: &Map<String, Value>) -> Result<Career, ApiError> {
    client.put(&format!("/careers/{id}"), fields).await
}

pub async fn delete_career(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/careers/{id}")).await
}

pub async fn list_colleges(client: &ApiClient, filter: &CollegeFilter) -> Result<Vec<College>, ApiError> {
    client.get_query("/colleges", &filter.query()).await
}

pub async fn college(client: &ApiClient, id: &str) -> Result<College, ApiError> {
    client.get(&format!("/colleges/{id}")).await
}

pub async fn create_college(client: &ApiClient, fields: &Map<String, Value>) -> Result<College, ApiError> {
    client.post("/colleges", fields).await
}

pub async fn update_college(client: &ApiClient, id: &str, fields: &Map<String, Value>) -> Result<College, ApiError> {
    client.put(&format!("/colleges/{id}"), fields).await
}

pub async fn delete_college(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/colleges/{id}")).await
}

pub async fn list_scholarships(client: &ApiClient) -> Result<Vec<Scholarship>, ApiError> {
    client.get("/scholarships").await
}

pub async fn create_scholarship(client: &ApiClient, fields: &Map<String, Value>) -> Result<Scholarship, ApiError> {
    client.post("/scholarships", fields).await
}

pub async fn update_scholarship(
    client: &ApiClient,
    id: &str,
    fields: &Map<String, Value>,
) -> Result<Scholarship, ApiError> {
    client.put(&format!("/scholarships/{id}"), fields).await
}

pub async fn delete_scholarship(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/scholarships/{id}")).await
}

pub async fn list_webinars(client: &ApiClient) -> Result<Vec<Webinar>, ApiError> {
    client.get("/webinars").await
}

pub async fn create_webinar(client: &ApiClient, fields: &Map<String, Value>) -> Result<Webinar, ApiError> {
    client.post("/webinars", fields).await
}

pub async fn update_webinar(client: &ApiClient, id: &str, fields: &Map<String, Value>) -> Result<Webinar, ApiError> {
    client.put(&format!("/webinars/{id}"), fields).await
}

pub async fn delete_webinar(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/webinars/{id}")).await
}

pub async fn list_resources(client: &ApiClient) -> Result<Vec<Resource>, ApiError> {
    client.get("/resources").await
}

// =============================================================================
// BLOG + COMMUNITY
// =============================================================================

pub async fn list_posts(client: &ApiClient) -> Result<Vec<BlogPost>, ApiError> {
    client.get("/blog/posts").await
}

pub async fn post(client: &ApiClient, id: &str) -> Result<BlogPost, ApiError> {
    client.get(&format!("/blog/posts/{id}")).await
}

pub async fn create_post(client: &ApiClient, fields: &Map<String, Value>) -> Result<BlogPost, ApiError> {
    client.post("/blog/posts", fields).await
}

pub async fn update_post(client: &ApiClient, id: &str, fields: &Map<String, Value>) -> Result<BlogPost, ApiError> {
    client.put(&format!("/blog/posts/{id}"), fields).await
}

pub async fn delete_post(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/blog/posts/{id}")).await
}

pub async fn list_comments(client: &ApiClient, post_id: &str) -> Result<Vec<Comment>, ApiError> {
    client.get(&format!("/blog/posts/{post_id}/comments")).await
}

pub async fn add_comment(client: &ApiClient, post_id: &str, text: &str) -> Result<Comment, ApiError> {
    client.post(&format!("/blog/posts/{post_id}/comments"), &serde_json::json!({ "text": text })).await
}

pub async fn delete_comment(client: &ApiClient, comment_id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/blog/posts/comments/{comment_id}")).await
}

pub async fn list_discussions(client: &ApiClient, filter: &DiscussionFilter) -> Result<Vec<Discussion>, ApiError> {
    client.get_query("/discussions", &filter.query()).await
}

pub async fn create_discussion(client: &ApiClient, discussion: &NewDiscussion) -> Result<Discussion, ApiError> {
    client.post("/discussions", discussion).await
}

// =============================================================================
// SUBMISSIONS + ADMIN
// =============================================================================

/// Public contact form; no session required.
pub async fn submit_contact(client: &ApiClient, request: &ContactRequest) -> Result<Ack, ApiError> {
    client.post("/submissions", request).await
}

pub async fn list_submissions(client: &ApiClient) -> Result<Vec<Submission>, ApiError> {
    client.get("/submissions").await
}

pub async fn set_submission_status(client: &ApiClient, id: &str, status: SubmissionStatus) -> Result<Value, ApiError> {
    client.put(&format!("/submissions/{id}"), &serde_json::json!({ "status": status })).await
}

pub async fn delete_submission(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/submissions/{id}")).await
}

pub async fn admin_stats(client: &ApiClient) -> Result<AdminStats, ApiError> {
    client.get("/admin/stats").await
}

// =============================================================================
// AI TOOLS
// =============================================================================

/// Send one message; the backend answers with the full conversation.
pub async fn chat(client: &ApiClient, message: &str) -> Result<Vec<ChatMessage>, ApiError> {
    client.post("/ai/chat", &serde_json::json!({ "message": message })).await
}

/// Ask for a worked, step-by-step solution to `problem`.
pub async fn solve_step_by_step(client: &ApiClient, problem: &str) -> Result<Vec<SolutionStep>, ApiError> {
    client.post("/ai/solve-step-by-step", &serde_json::json!({ "problem": problem })).await
}
