//! Wire DTOs for the career guidance REST API.
//!
//! DESIGN
//! ======
//! Shapes follow the backend's JSON: `_id` identifiers and camelCase fields.
//! Every optional field defaults so partially populated records from the
//! admin screens still deserialize, and numeric-or-text fields (fees,
//! rankings, salaries) are normalized to display strings on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ASSESSMENTS
// =============================================================================

/// Completion state of one assessment for the current student.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    /// Also covers any status string this client does not know.
    #[default]
    #[serde(other)]
    Pending,
}

impl AssessmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// An assessment assigned to the student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(rename = "_id")]
    pub id: String,
    pub assessment_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: AssessmentStatus,
    /// Percent complete while the assessment is in progress.
    #[serde(default)]
    pub progress: Option<u32>,
    /// `Aptitude`, `Interest`, `Personality`, or `Values`.
    #[serde(default)]
    pub assessment_type: String,
}

// =============================================================================
// CATALOG
// =============================================================================

/// A career recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rationale: Option<String>,
    /// Average salary in lakhs per annum.
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub salary: Option<String>,
    #[serde(default)]
    pub growth: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub match_score: Option<u32>,
}

/// A college listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(rename = "nirf_ranking", default, deserialize_with = "deserialize_text_or_number")]
    pub nirf_ranking: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub fees: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub placements: Option<String>,
    #[serde(default)]
    pub brochure_url: Option<String>,
}

/// A scholarship listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Whether a webinar is still ahead or available as a recording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebinarStatus {
    Past,
    #[default]
    #[serde(other)]
    Upcoming,
}

impl WebinarStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: WebinarStatus,
    /// Replay link once the webinar is past.
    #[serde(default)]
    pub recording_url: Option<String>,
}

impl Webinar {
    /// Registration link, or the recording once the webinar is past.
    #[must_use]
    pub fn action_link(&self) -> &str {
        let recording = match self.status {
            WebinarStatus::Past => self.recording_url.as_deref().filter(|url| !url.is_empty()),
            WebinarStatus::Upcoming => None,
        };
        recording.or(self.link.as_deref()).unwrap_or("#")
    }
}

/// An article, video, or webinar in the resource library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// `Article`, `Video`, or `Webinar`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, alias = "img")]
    pub image: Option<String>,
}

impl Resource {
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match self.kind.as_str() {
            "Video" | "Webinar" => "Watch Now",
            _ => "Read Now",
        }
    }
}

// =============================================================================
// SAVED ITEMS
// =============================================================================

/// Kind of catalog entry a student can bookmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedKind {
    College,
    Career,
    Resource,
}

impl SavedKind {
    pub const ALL: [Self; 3] = [Self::College, Self::Career, Self::Resource];

    /// Tab label on the saved-items page.
    #[must_use]
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::College => "Colleges",
            Self::Career => "Careers",
            Self::Resource => "Resources",
        }
    }
}

/// Body of `POST /api/users/save` and `DELETE /api/users/save`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTarget {
    pub item_id: String,
    pub item_type: SavedKind,
}

/// A bookmarked entry; colleges and careers carry `name`, resources `title`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "img")]
    pub image: Option<String>,
}

impl SavedItem {
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().or(self.title.as_deref()).unwrap_or("Untitled")
    }
}

/// Saved items grouped by kind, as returned by `GET /api/users/saved`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedItems {
    #[serde(default)]
    pub colleges: Vec<SavedItem>,
    #[serde(default)]
    pub careers: Vec<SavedItem>,
    #[serde(default)]
    pub resources: Vec<SavedItem>,
}

impl SavedItems {
    #[must_use]
    pub fn of_kind(&self, kind: SavedKind) -> &[SavedItem] {
        match kind {
            SavedKind::College => &self.colleges,
            SavedKind::Career => &self.careers,
            SavedKind::Resource => &self.resources,
        }
    }
}

// =============================================================================
// DASHBOARDS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total: u32,
}

/// One entry in the dashboard's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// `College`, `Career`, or `Resource`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ActivityItem {
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().or(self.title.as_deref()).unwrap_or_default()
    }
}

/// Student dashboard summary from `GET /api/users/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub assessments: AssessmentProgress,
    #[serde(default)]
    pub career_matches_unlocked: u32,
    /// Percent, 0-100.
    #[serde(default)]
    pub roadmap_progress: u32,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

/// Counts shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub colleges: u64,
    #[serde(default)]
    pub careers: u64,
    #[serde(default)]
    pub scholarships: u64,
    #[serde(default)]
    pub new_submissions: u64,
}

/// A user row on the admin users screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

// =============================================================================
// BLOG + COMMUNITY
// =============================================================================

/// Author reference embedded in comments and discussions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Populated author, or a bare display name on older posts.
    #[serde(default, deserialize_with = "deserialize_author")]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BlogPost {
    #[must_use]
    pub fn byline(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).filter(|name| !name.is_empty()).unwrap_or("Learn-x-AI Team")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/discussions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
    pub category: String,
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Triage state of a contact submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Contacted,
    Resolved,
    #[default]
    #[serde(other)]
    New,
}

impl SubmissionStatus {
    pub const ALL: [Self; 3] = [Self::New, Self::Contacted, Self::Resolved];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub submission_type: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the public `POST /api/submissions` contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submission_type: String,
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// AI CHAT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Ai,
}

/// One bubble in the AI counselor conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: ChatSender::User, text: text.into() }
    }

    #[must_use]
    pub fn ai(text: impl Into<String>) -> Self {
        Self { sender: ChatSender::Ai, text: text.into() }
    }
}

/// One step of a worked solution from `POST /api/ai/solve-step-by-step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub step: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_author<'de, D>(deserializer: D) -> Result<Option<AuthorRef>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(name)) => Ok(Some(AuthorRef { name, ..AuthorRef::default() })),
        Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("expected author object or name, got {other}"))),
    }
}
