use serde::{Deserialize, Serialize};

/// Sentinel shown for any field the API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: String,
    pub duration: String,
    pub like_count: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub color: String,
}

impl Category {
    pub const ALL_ID: &'static str = "0";

    pub fn all() -> Self {
        Self {
            id: Self::ALL_ID.to_string(),
            title: "All".to_string(),
            color: crate::youtube::normalize::color_for_category(Self::ALL_ID).to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == Self::ALL_ID
    }
}

/// One page of videos. A missing `next_page_token` means there are no more pages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub items: Vec<Video>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub author_name: String,
    pub text: String,
    pub like_count: String,
    pub published_at: String,
}
