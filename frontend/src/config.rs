use crate::env_variable_utils::{get_api_base_url, get_youtube_api_key};
use lazy_static::lazy_static;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const REGION_CODE: &str = "US";
pub const PAGE_SIZE: u32 = 24;
pub const COMMENT_LIMIT: u32 = 25;
pub const RELATED_SEARCH_LIMIT: u32 = 8;
pub const RELATED_CAP: usize = 15;
pub const REFRESH_INTERVAL_MS: i32 = 5 * 60 * 1000;
pub const EMBED_URL: &str = "https://www.youtube.com/embed";

lazy_static! {
    pub static ref API_CONFIG: ApiConfig = ApiConfig {
        base_url: get_api_base_url(),
        api_key: get_youtube_api_key(),
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` when the hosting page did not provide a key.
    pub api_key: Option<String>,
}
