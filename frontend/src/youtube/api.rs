use crate::config::{
    ApiConfig, API_CONFIG, COMMENT_LIMIT, PAGE_SIZE, REGION_CODE, RELATED_CAP,
    RELATED_SEARCH_LIMIT,
};
use crate::models::{Category, Comment, SearchResult, Video};
use crate::youtube::error::ApiError;
use crate::youtube::normalize::{
    color_for_category, format_category, format_comment, format_video_response,
};
use crate::youtube::raw::{
    CategoryListResponse, CommentThreadListResponse, RawVideo, VideoListResponse,
};
use crate::youtube::transport::{GlooTransport, Params, Transport};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const FULL_PARTS: &str = "snippet,statistics,contentDetails";

pub fn default_client() -> YouTubeClient<GlooTransport> {
    YouTubeClient::from_config(&API_CONFIG)
}

#[derive(Debug, Clone)]
pub struct YouTubeClient<T> {
    transport: T,
    api_key: Option<String>,
}

impl YouTubeClient<GlooTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(GlooTransport::new(&config.base_url), config.api_key.clone())
    }
}

impl<T: Transport> YouTubeClient<T> {
    pub fn new(transport: T, api_key: Option<String>) -> Self {
        Self { transport, api_key }
    }

    /// One page of the most-popular chart, optionally narrowed to a category.
    pub async fn list_trending(
        &self,
        category_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<SearchResult, ApiError> {
        let mut params: Params = vec![
            ("part", FULL_PARTS.to_string()),
            ("chart", "mostPopular".to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
            ("regionCode", REGION_CODE.to_string()),
        ];
        push_category_filter(&mut params, category_id);
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let response: VideoListResponse = self
            .fetch("/videos", params)
            .await
            .map_err(|e| primary_failure("fetching trending videos", e))?;

        Ok(SearchResult {
            items: response.items.iter().map(format_video_response).collect(),
            next_page_token: response.next_page_token,
        })
    }

    /// Newest-first search. Statistics and durations come from a second,
    /// batched `/videos` call that is skipped when nothing matched.
    pub async fn search(
        &self,
        query: &str,
        category_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<SearchResult, ApiError> {
        self.search_with_details(query, category_id, page_token)
            .await
            .map_err(|e| primary_failure("searching videos", e))
    }

    async fn search_with_details(
        &self,
        query: &str,
        category_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<SearchResult, ApiError> {
        let mut params: Params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("q", query.to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
            ("order", "date".to_string()),
        ];
        push_category_filter(&mut params, category_id);
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let found: VideoListResponse = self.fetch("/search", params).await?;
        let ids = found
            .items
            .iter()
            .filter_map(|item| item.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        if ids.is_empty() {
            return Ok(SearchResult::default());
        }

        let details: VideoListResponse = self
            .fetch(
                "/videos",
                vec![
                    ("part", "statistics,contentDetails".to_string()),
                    ("id", ids),
                ],
            )
            .await?;
        let details_by_id: HashMap<String, RawVideo> = details
            .items
            .into_iter()
            .filter_map(|item| Some((item.id.as_str()?.to_string(), item)))
            .collect();

        let items = found
            .items
            .into_iter()
            .filter(|item| item.id.as_str().is_some())
            .map(|mut item| {
                let detail = item.id.as_str().and_then(|id| details_by_id.get(id));
                item.statistics = detail.and_then(|d| d.statistics.clone());
                item.content_details = detail.and_then(|d| d.content_details.clone());
                format_video_response(&item)
            })
            .collect();

        Ok(SearchResult {
            items,
            next_page_token: found.next_page_token,
        })
    }

    pub async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        let params: Params = vec![
            ("part", FULL_PARTS.to_string()),
            ("id", video_id.to_string()),
        ];

        let response: VideoListResponse = self
            .fetch("/videos", params)
            .await
            .map_err(|e| primary_failure("fetching video", e))?;

        response
            .items
            .first()
            .map(format_video_response)
            .ok_or_else(|| primary_failure("fetching video", ApiError::NotFound))
    }

    /// Top-level comments by relevance. Failures (comments disabled included)
    /// yield an empty list.
    pub async fn get_comments(&self, video_id: &str) -> Vec<Comment> {
        let params: Params = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", COMMENT_LIMIT.to_string()),
            ("order", "relevance".to_string()),
        ];

        match self
            .fetch::<CommentThreadListResponse>("/commentThreads", params)
            .await
        {
            Ok(response) => response.items.iter().map(format_comment).collect(),
            Err(e) => {
                log::warn!("Error fetching comments for {video_id}: {e}");
                Vec::new()
            }
        }
    }

    /// Videos from the same channel and category as `video_id`, excluding it.
    /// Failures yield an empty list.
    pub async fn get_related(&self, video_id: &str) -> Vec<Video> {
        match self.related_from_channel(video_id).await {
            Ok(videos) => videos,
            Err(e) => {
                log::warn!("Error fetching related videos for {video_id}: {e}");
                Vec::new()
            }
        }
    }

    async fn related_from_channel(&self, video_id: &str) -> Result<Vec<Video>, ApiError> {
        let source: VideoListResponse = self
            .fetch(
                "/videos",
                vec![("part", "snippet".to_string()), ("id", video_id.to_string())],
            )
            .await?;
        let snippet = source
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet)
            .ok_or(ApiError::NotFound)?;

        let mut params: Params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("maxResults", RELATED_SEARCH_LIMIT.to_string()),
        ];
        if let Some(channel_id) = snippet.channel_id {
            params.push(("channelId", channel_id));
        }
        if let Some(category_id) = snippet.category_id {
            params.push(("videoCategoryId", category_id));
        }
        let channel_videos: VideoListResponse = self.fetch("/search", params).await?;

        let ids = channel_videos
            .items
            .iter()
            .filter_map(|item| item.id.as_str())
            .filter(|id| *id != video_id)
            .take(RELATED_CAP)
            .collect::<Vec<_>>()
            .join(",");
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let related: VideoListResponse = self
            .fetch(
                "/videos",
                vec![("part", FULL_PARTS.to_string()), ("id", ids)],
            )
            .await?;
        Ok(related.items.iter().map(format_video_response).collect())
    }

    /// Assignable categories for the configured region, or a fixed fallback set.
    pub async fn list_categories(&self) -> Vec<Category> {
        let params: Params = vec![
            ("part", "snippet".to_string()),
            ("regionCode", REGION_CODE.to_string()),
        ];

        match self
            .fetch::<CategoryListResponse>("/videoCategories", params)
            .await
        {
            Ok(response) => response
                .items
                .iter()
                .filter(|item| item.snippet.assignable)
                .map(format_category)
                .collect(),
            Err(e) => {
                log::warn!("Error fetching categories, using defaults: {e}");
                fallback_categories()
            }
        }
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        mut params: Params,
    ) -> Result<R, ApiError> {
        let Some(api_key) = &self.api_key else {
            return Err(ApiError::Configuration(
                "YOUTUBE_API_KEY is not configured".to_string(),
            ));
        };

        log::debug!("GET {endpoint} {params:?}");
        params.push(("key", api_key.clone()));

        let body = self.transport.get(endpoint, &params).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::Transient(format!("Failed to parse {endpoint} response: {e}")))
    }
}

pub fn fallback_categories() -> Vec<Category> {
    [
        (Category::ALL_ID, "All"),
        ("10", "Music"),
        ("20", "Gaming"),
        ("24", "Entertainment"),
        ("28", "Science & Tech"),
    ]
    .into_iter()
    .map(|(id, title)| Category {
        id: id.to_string(),
        title: title.to_string(),
        color: color_for_category(id).to_string(),
    })
    .collect()
}

fn push_category_filter(params: &mut Params, category_id: Option<&str>) {
    if let Some(id) = category_id.filter(|id| !id.is_empty() && *id != Category::ALL_ID) {
        params.push(("videoCategoryId", id.to_string()));
    }
}

fn primary_failure(context: &str, error: ApiError) -> ApiError {
    log::error!("Error {context}: {error}");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::error::TransportError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Call = (String, Params);

    #[derive(Default)]
    struct Recorded {
        responses: RefCell<VecDeque<Result<Value, TransportError>>>,
        calls: RefCell<Vec<Call>>,
    }

    /// Replays queued responses in order and records every request.
    #[derive(Clone, Default)]
    struct MockTransport(Rc<Recorded>);

    impl MockTransport {
        fn replying(responses: Vec<Result<Value, TransportError>>) -> Self {
            let mock = Self::default();
            mock.0.responses.borrow_mut().extend(responses);
            mock
        }

        fn calls(&self) -> Vec<Call> {
            self.0.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn get(&self, endpoint: &str, params: &Params) -> Result<Value, TransportError> {
            self.0
                .calls
                .borrow_mut()
                .push((endpoint.to_string(), params.clone()));
            self.0
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no response queued".into())))
        }
    }

    fn client(mock: &MockTransport) -> YouTubeClient<MockTransport> {
        YouTubeClient::new(mock.clone(), Some("test-key".to_string()))
    }

    fn param<'a>(call: &'a Call, key: &str) -> Option<&'a str> {
        call.1
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn forbidden(reason: &str, message: &str) -> Result<Value, TransportError> {
        Err(TransportError::Http {
            status: 403,
            body: json!({ "error": { "code": 403, "message": message, "errors": [{ "reason": reason }] } })
                .to_string(),
        })
    }

    #[test]
    fn trending_filters_by_category_and_attaches_key() {
        let mock = MockTransport::replying(vec![
            Ok(json!({ "items": [{ "id": "v1" }], "nextPageToken": "next" })),
            Ok(json!({ "items": [] })),
        ]);
        let client = client(&mock);

        let page = block_on(client.list_trending(Some("10"), Some("tok"))).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("next"));

        let page = block_on(client.list_trending(Some("0"), None)).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_page_token, None);

        let calls = mock.calls();
        assert_eq!(calls[0].0, "/videos");
        assert_eq!(param(&calls[0], "chart"), Some("mostPopular"));
        assert_eq!(param(&calls[0], "videoCategoryId"), Some("10"));
        assert_eq!(param(&calls[0], "pageToken"), Some("tok"));
        assert_eq!(param(&calls[0], "key"), Some("test-key"));
        assert_eq!(param(&calls[1], "videoCategoryId"), None);
        assert_eq!(param(&calls[1], "pageToken"), None);
        assert_eq!(param(&calls[1], "key"), Some("test-key"));
    }

    #[test]
    fn search_without_matches_skips_detail_call() {
        let mock = MockTransport::replying(vec![Ok(json!({
            "items": [],
            "nextPageToken": "ignored"
        }))]);

        let result = block_on(client(&mock).search("nothing", None, None)).unwrap();

        assert_eq!(result, SearchResult::default());
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/search");
        assert_eq!(param(&calls[0], "order"), Some("date"));
        assert_eq!(param(&calls[0], "q"), Some("nothing"));
    }

    #[test]
    fn search_merges_details_by_id() {
        let mock = MockTransport::replying(vec![
            Ok(json!({
                "items": [
                    { "id": { "videoId": "a" }, "snippet": { "title": "First" } },
                    { "id": { "videoId": "b" }, "snippet": { "title": "Second" } }
                ],
                "nextPageToken": "page2"
            })),
            Ok(json!({
                "items": [
                    { "id": "b", "statistics": { "viewCount": "2500" }, "contentDetails": { "duration": "PT3M7S" } }
                ]
            })),
        ]);

        let result = block_on(client(&mock).search("rust", Some("28"), None)).unwrap();

        assert_eq!(result.next_page_token.as_deref(), Some("page2"));
        let ids: Vec<_> = result.items.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(result.items[0].view_count, "N/A");
        assert_eq!(result.items[1].view_count, "2.5K");
        assert_eq!(result.items[1].duration, "3:07");
        assert_eq!(result.items[1].title, "Second");

        let calls = mock.calls();
        assert_eq!(param(&calls[0], "videoCategoryId"), Some("28"));
        assert_eq!(calls[1].0, "/videos");
        assert_eq!(param(&calls[1], "id"), Some("a,b"));
        assert_eq!(param(&calls[1], "part"), Some("statistics,contentDetails"));
    }

    #[test]
    fn search_continuation_sends_page_token() {
        let mock = MockTransport::replying(vec![
            Ok(json!({
                "items": [{ "id": { "videoId": "c" }, "snippet": { "title": "Third" } }],
                "nextPageToken": "page3"
            })),
            Ok(json!({ "items": [{ "id": "c" }] })),
        ]);

        let result = block_on(client(&mock).search("rust", None, Some("page2"))).unwrap();

        assert_eq!(result.next_page_token.as_deref(), Some("page3"));
        let calls = mock.calls();
        assert_eq!(calls[0].0, "/search");
        assert_eq!(param(&calls[0], "pageToken"), Some("page2"));
        assert_eq!(param(&calls[0], "videoCategoryId"), None);
        assert_eq!(param(&calls[1], "pageToken"), None);
    }

    #[test]
    fn unknown_video_is_not_found() {
        let mock = MockTransport::replying(vec![Ok(json!({ "items": [] }))]);
        let error = block_on(client(&mock).get_video("missing")).unwrap_err();
        assert_eq!(error, ApiError::NotFound);
        assert_eq!(error.user_message(), "Video not found.");
    }

    #[test]
    fn quota_exhaustion_surfaces_from_primary_fetch() {
        let mock = MockTransport::replying(vec![forbidden("quotaExceeded", "You have exceeded your quota.")]);
        let error = block_on(client(&mock).get_video("v1")).unwrap_err();
        assert!(matches!(error, ApiError::Quota(_)));
    }

    #[test]
    fn missing_key_fails_without_a_request() {
        let mock = MockTransport::default();
        let client = YouTubeClient::new(mock.clone(), None);

        let error = block_on(client.list_trending(None, None)).unwrap_err();
        assert!(matches!(error, ApiError::Configuration(_)));
        assert!(block_on(client.get_comments("v1")).is_empty());
        assert_eq!(block_on(client.list_categories()), fallback_categories());
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn comment_failures_are_absorbed() {
        let mock = MockTransport::replying(vec![forbidden(
            "commentsDisabled",
            "The video has disabled comments.",
        )]);
        assert!(block_on(client(&mock).get_comments("v1")).is_empty());

        let call = &mock.calls()[0];
        assert_eq!(call.0, "/commentThreads");
        assert_eq!(param(call, "maxResults"), Some("25"));
        assert_eq!(param(call, "order"), Some("relevance"));
    }

    #[test]
    fn related_with_only_the_source_video_skips_detail_call() {
        let mock = MockTransport::replying(vec![
            Ok(json!({ "items": [{ "id": "X", "snippet": { "channelId": "chan", "categoryId": "20" } }] })),
            Ok(json!({ "items": [{ "id": { "videoId": "X" } }] })),
        ]);

        let related = block_on(client(&mock).get_related("X"));

        assert!(related.is_empty());
        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(param(&calls[1], "channelId"), Some("chan"));
        assert_eq!(param(&calls[1], "videoCategoryId"), Some("20"));
        assert_eq!(param(&calls[1], "maxResults"), Some("8"));
    }

    #[test]
    fn related_excludes_source_video() {
        let mock = MockTransport::replying(vec![
            Ok(json!({ "items": [{ "id": "X", "snippet": { "channelId": "chan", "categoryId": "20" } }] })),
            Ok(json!({ "items": [
                { "id": { "videoId": "Y" } },
                { "id": { "videoId": "X" } },
                { "id": { "videoId": "Z" } }
            ] })),
            Ok(json!({ "items": [{ "id": "Y" }, { "id": "Z" }] })),
        ]);

        let related = block_on(client(&mock).get_related("X"));

        let ids: Vec<_> = related.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["Y", "Z"]);
        assert_eq!(param(&mock.calls()[2], "id"), Some("Y,Z"));
    }

    #[test]
    fn related_candidates_are_capped() {
        let candidates: Vec<Value> = (0..20)
            .map(|i| json!({ "id": { "videoId": format!("r{i}") } }))
            .collect();
        let mock = MockTransport::replying(vec![
            Ok(json!({ "items": [{ "id": "X", "snippet": { "channelId": "chan" } }] })),
            Ok(json!({ "items": candidates })),
            Ok(json!({ "items": [] })),
        ]);

        block_on(client(&mock).get_related("X"));

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        let ids: Vec<&str> = param(&calls[2], "id").unwrap().split(',').collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids.first(), Some(&"r0"));
        assert_eq!(ids.last(), Some(&"r14"));
        assert_eq!(param(&calls[2], "part"), Some("snippet,statistics,contentDetails"));
    }

    #[test]
    fn related_failure_is_absorbed() {
        let mock = MockTransport::replying(vec![Err(TransportError::Network("offline".into()))]);
        assert!(block_on(client(&mock).get_related("X")).is_empty());
    }

    #[test]
    fn categories_keep_only_assignable() {
        let mock = MockTransport::replying(vec![Ok(json!({ "items": [
            { "id": "10", "snippet": { "title": "Music", "assignable": true } },
            { "id": "18", "snippet": { "title": "Short Movies", "assignable": false } }
        ] }))]);

        let categories = block_on(client(&mock).list_categories());

        assert_eq!(
            categories,
            vec![Category {
                id: "10".into(),
                title: "Music".into(),
                color: "#06b6d4".into(),
            }]
        );
        assert_eq!(param(&mock.calls()[0], "regionCode"), Some("US"));
    }

    #[test]
    fn category_fallback_is_stable() {
        let mock = MockTransport::replying(vec![
            Err(TransportError::Network("offline".into())),
            Err(TransportError::Network("offline".into())),
        ]);
        let client = client(&mock);

        let first = block_on(client.list_categories());
        let second = block_on(client.list_categories());

        assert_eq!(first, second);
        let titles: Vec<_> = first.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            ["All", "Music", "Gaming", "Entertainment", "Science & Tech"]
        );
        assert_eq!(first[0].color, "#6b7280");
        assert_eq!(first[4].color, "#10b981");
    }
}
