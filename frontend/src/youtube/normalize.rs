use crate::models::{Category, Comment, Video, NOT_AVAILABLE};
use crate::utils::{format_count, format_iso8601_duration, format_iso8601_time_since};
use crate::youtube::raw::{RawCategory, RawCommentThread, RawThumbnails, RawVideo};

pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

pub fn color_for_category(id: &str) -> &'static str {
    match id {
        "1" => "#ef4444",  // Film & Animation
        "2" => "#f97316",  // Autos & Vehicles
        "10" => "#06b6d4", // Music
        "15" => "#84cc16", // Pets & Animals
        "17" => "#ec4899", // Sports
        "19" => "#8b5cf6", // Travel & Events
        "20" => "#6366f1", // Gaming
        "22" => "#14b8a6", // People & Blogs
        "23" => "#f59e0b", // Comedy
        "24" => "#0ea5e9", // Entertainment
        "25" => "#dc2626", // News & Politics
        "26" => "#0891b2", // Howto & Style
        "27" => "#84cc16", // Education
        "28" => "#10b981", // Science & Technology
        "29" => "#6366f1", // Nonprofits & Activism
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

pub fn format_video_response(item: &RawVideo) -> Video {
    let snippet = item.snippet.clone().unwrap_or_default();
    let statistics = item.statistics.as_ref();
    let duration = item
        .content_details
        .as_ref()
        .and_then(|details| details.duration.as_deref());

    Video {
        id: item.id.as_str().unwrap_or_default().to_string(),
        title: or_not_available(snippet.title),
        thumbnail: best_thumbnail(&snippet.thumbnails),
        channel_title: or_not_available(snippet.channel_title),
        published_at: snippet
            .published_at
            .as_deref()
            .map(format_iso8601_time_since)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        view_count: statistics
            .and_then(|stats| stats.view_count.as_deref())
            .map(format_count)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        duration: duration
            .map(format_iso8601_duration)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        like_count: statistics
            .and_then(|stats| stats.like_count.as_deref())
            .map(format_count),
    }
}

pub fn format_comment(thread: &RawCommentThread) -> Comment {
    let snippet = &thread.snippet.top_level_comment.snippet;
    Comment {
        id: thread.id.clone(),
        author_name: or_not_available(snippet.author_display_name.clone()),
        text: or_not_available(snippet.text_display.clone()),
        like_count: snippet
            .like_count
            .map(|likes| format_count(&likes.to_string()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        published_at: snippet
            .published_at
            .as_deref()
            .map(format_iso8601_time_since)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

pub fn format_category(raw: &RawCategory) -> Category {
    Category {
        id: raw.id.clone(),
        title: or_not_available(raw.snippet.title.clone()),
        color: color_for_category(&raw.id).to_string(),
    }
}

fn best_thumbnail(thumbnails: &RawThumbnails) -> String {
    [
        &thumbnails.high,
        &thumbnails.medium,
        &thumbnails.standard,
        &thumbnails.maxres,
        &thumbnails.default,
    ]
    .into_iter()
    .find_map(|thumbnail| thumbnail.as_ref().and_then(|t| t.url.clone()))
    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawVideo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn video_from_videos_endpoint() {
        let video = format_video_response(&raw(json!({
            "id": "abc123",
            "snippet": {
                "title": "A video",
                "channelTitle": "A channel",
                "publishedAt": "2020-01-01T00:00:00Z",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/default.jpg" },
                    "high": { "url": "https://i.ytimg.com/high.jpg" }
                }
            },
            "statistics": { "viewCount": "1234567", "likeCount": "4321" },
            "contentDetails": { "duration": "PT1H2M3S" }
        })));

        assert_eq!(video.id, "abc123");
        assert_eq!(video.title, "A video");
        assert_eq!(video.channel_title, "A channel");
        assert_eq!(video.thumbnail, "https://i.ytimg.com/high.jpg");
        assert_eq!(video.view_count, "1.2M");
        assert_eq!(video.like_count.as_deref(), Some("4.3K"));
        assert_eq!(video.duration, "1:02:03");
        assert!(video.published_at.ends_with("y ago"));
    }

    #[test]
    fn video_from_search_endpoint_uses_nested_id() {
        let video = format_video_response(&raw(json!({
            "id": { "kind": "youtube#video", "videoId": "nested1" },
            "snippet": {
                "title": "Found",
                "thumbnails": { "medium": { "url": "https://i.ytimg.com/mq.jpg" } }
            }
        })));

        assert_eq!(video.id, "nested1");
        assert_eq!(video.thumbnail, "https://i.ytimg.com/mq.jpg");
    }

    #[test]
    fn missing_fields_fall_back_to_sentinel() {
        let video = format_video_response(&raw(json!({ "id": "bare" })));

        assert_eq!(video.id, "bare");
        assert_eq!(video.title, "N/A");
        assert_eq!(video.thumbnail, "N/A");
        assert_eq!(video.channel_title, "N/A");
        assert_eq!(video.published_at, "N/A");
        assert_eq!(video.view_count, "N/A");
        assert_eq!(video.duration, "N/A");
        assert_eq!(video.like_count, None);
    }

    #[test]
    fn comment_thread_is_flattened() {
        let thread: RawCommentThread = serde_json::from_value(json!({
            "id": "c1",
            "snippet": {
                "topLevelComment": {
                    "snippet": {
                        "authorDisplayName": "viewer",
                        "textDisplay": "great video",
                        "likeCount": 1500,
                        "publishedAt": "2021-03-04T05:06:07Z"
                    }
                }
            }
        }))
        .unwrap();

        let comment = format_comment(&thread);
        assert_eq!(comment.id, "c1");
        assert_eq!(comment.author_name, "viewer");
        assert_eq!(comment.text, "great video");
        assert_eq!(comment.like_count, "1.5K");
        assert_ne!(comment.published_at, "N/A");
    }

    #[test]
    fn unknown_category_is_gray() {
        assert_eq!(color_for_category("10"), "#06b6d4");
        assert_eq!(color_for_category("9999"), DEFAULT_CATEGORY_COLOR);
        assert_eq!(color_for_category("0"), DEFAULT_CATEGORY_COLOR);
    }
}
