//! Wire shapes of the YouTube Data API v3 responses.
//!
//! Every field is optional so a partial payload still decodes; the
//! normalizer decides what a missing value turns into.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoListResponse {
    pub items: Vec<RawVideo>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVideo {
    pub id: RawVideoId,
    pub snippet: Option<RawSnippet>,
    pub statistics: Option<RawStatistics>,
    pub content_details: Option<RawContentDetails>,
}

/// `/videos` returns a plain id, `/search` nests it under `videoId`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawVideoId {
    Plain(String),
    Nested {
        #[serde(rename = "videoId", default)]
        video_id: Option<String>,
    },
}

impl Default for RawVideoId {
    fn default() -> Self {
        RawVideoId::Nested { video_id: None }
    }
}

impl RawVideoId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawVideoId::Plain(id) => Some(id.as_str()),
            RawVideoId::Nested { video_id } => video_id.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnippet {
    pub title: Option<String>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    pub category_id: Option<String>,
    pub published_at: Option<String>,
    pub thumbnails: RawThumbnails,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawThumbnails {
    pub maxres: Option<RawThumbnail>,
    pub standard: Option<RawThumbnail>,
    pub high: Option<RawThumbnail>,
    pub medium: Option<RawThumbnail>,
    pub default: Option<RawThumbnail>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawThumbnail {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CategoryListResponse {
    pub items: Vec<RawCategory>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawCategory {
    pub id: String,
    pub snippet: RawCategorySnippet,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawCategorySnippet {
    pub title: Option<String>,
    pub assignable: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CommentThreadListResponse {
    pub items: Vec<RawCommentThread>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawCommentThread {
    pub id: String,
    pub snippet: RawCommentThreadSnippet,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCommentThreadSnippet {
    pub top_level_comment: RawTopLevelComment,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawTopLevelComment {
    pub snippet: RawCommentSnippet,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCommentSnippet {
    pub author_display_name: Option<String>,
    pub text_display: Option<String>,
    pub like_count: Option<u64>,
    pub published_at: Option<String>,
}

/// Error envelope the API returns alongside a non-2xx status.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
    pub errors: Vec<ApiErrorReason>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ApiErrorReason {
    pub reason: String,
    pub message: String,
}
