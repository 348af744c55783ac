//! Shared wire DTOs for the browser/server/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend-of-record JSON so the server proxy and the
//! browser decode the same schema. Decoding is lenient where the backend is
//! known to be loose (nullable scores, missing keyword lists, free-form
//! status strings) so a single odd row never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ARTICLES
// =============================================================================

/// Editorial status of an article. Unknown backend values are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Published,
    Approved,
    Rejected,
    Other(String),
}

impl ArticleStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    /// Badge text shown next to an article.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Published => "Опубликовано",
            Self::Approved => "Одобрено",
            Self::Rejected => "Отклонено",
            Self::Pending | Self::Other(_) => "В ожидании",
        }
    }

    /// Only undecided articles offer approve/reject actions.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<String> for ArticleStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "published" => Self::Published,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw),
        }
    }
}

impl From<ArticleStatus> for String {
    fn from(status: ArticleStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// A discovered content candidate as returned by `GET /api/articles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevance_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ArticleStatus,
    /// Discovery timestamp exactly as the backend formats it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub found_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

/// Envelope for `GET /api/articles`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

/// Status filter on the articles screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Published,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Published];

    /// Value sent as the `status` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Published => "published",
        }
    }
}

/// Editorial decision posted for a single article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArticleAction {
    Approve,
    Reject,
}

impl ArticleAction {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Aggregate counts for the dashboard header cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_articles: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_articles: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_articles: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_score: f64,
}

/// Kind of backend activity recorded in the log. A missing action reads as
/// an empty `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogAction {
    Search,
    Publish,
    Share,
    Other(String),
}

impl Default for LogAction {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for LogAction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "search" => Self::Search,
            "publish" => Self::Publish,
            "share" => Self::Share,
            _ => Self::Other(raw),
        }
    }
}

impl From<LogAction> for String {
    fn from(action: LogAction) -> Self {
        match action {
            LogAction::Search => "search".to_owned(),
            LogAction::Publish => "publish".to_owned(),
            LogAction::Share => "share".to_owned(),
            LogAction::Other(raw) => raw,
        }
    }
}

/// Outcome recorded for a log entry. Unknown values read as `Info`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

/// One row of the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: LogAction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: LogStatus,
}

/// Envelope for `GET /api/logs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogEntry>,
}

/// Backend job a dashboard trigger starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Job {
    Search,
    Publish,
}

impl Job {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Publish => "publish",
        }
    }
}

/// Acknowledgement body for triggers, decisions, and settings writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// SETTINGS
// =============================================================================

/// The single pipeline configuration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub search_hour: u32,
    pub search_minute: u32,
    pub blog_post_hour: u32,
    pub blog_post_minute: u32,
    pub facebook_post_hour: u32,
    pub facebook_post_minute: u32,
    pub instagram_post_hour: u32,
    pub instagram_post_minute: u32,
    pub max_articles_per_day: u32,
    pub min_article_score: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_hour: 9,
            search_minute: 0,
            blog_post_hour: 10,
            blog_post_minute: 0,
            facebook_post_hour: 12,
            facebook_post_minute: 0,
            instagram_post_hour: 14,
            instagram_post_minute: 0,
            max_articles_per_day: 5,
            min_article_score: 7.0,
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// The signed-in operator as reported by `/api/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Error body returned by the server for rejected or failed requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
