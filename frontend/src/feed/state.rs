use crate::models::{Category, SearchResult, Video};
use crate::youtube::error::ApiError;

/// What the listing page is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Trending { category_id: String },
    Search { query: String, category_id: String },
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::Trending {
            category_id: Category::ALL_ID.to_string(),
        }
    }
}

impl FeedSource {
    pub fn category_id(&self) -> &str {
        match self {
            FeedSource::Trending { category_id } | FeedSource::Search { category_id, .. } => {
                category_id
            }
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            FeedSource::Search { query, .. } => Some(query),
            FeedSource::Trending { .. } => None,
        }
    }
}

/// A page fetch handed out by [`FeedState`]. Its result must be fed back
/// through [`FeedState::apply`] together with the request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub source: FeedSource,
    pub page_token: Option<String>,
}

impl PageRequest {
    pub fn is_first_page(&self) -> bool {
        self.page_token.is_none()
    }
}

/// Listing state driven by infinite scroll.
///
/// Every reset, refresh and teardown bumps `generation`; results carrying an
/// older generation are dropped, so a page requested for a previous category
/// or search never lands in the current list. At most one page is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    source: FeedSource,
    videos: Vec<Video>,
    next_page_token: Option<String>,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl FeedState {
    pub fn new(source: FeedSource) -> Self {
        Self {
            source,
            has_more: true,
            ..Self::default()
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[cfg(test)]
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Switches to `source` and starts over from its first page.
    pub fn reset(&mut self, source: FeedSource) -> PageRequest {
        self.source = source;
        self.videos.clear();
        self.next_page_token = None;
        self.has_more = true;
        self.error = None;
        self.start_first_page()
    }

    /// Re-fetches the first page of the current source. The current videos
    /// stay on screen until the response replaces them.
    pub fn refresh(&mut self) -> PageRequest {
        self.start_first_page()
    }

    /// Next continuation page, unless one is already loading or the end has
    /// been reached.
    pub fn request_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        let page_token = self.next_page_token.clone()?;

        self.loading = true;
        Some(PageRequest {
            generation: self.generation,
            source: self.source.clone(),
            page_token: Some(page_token),
        })
    }

    /// Applies the outcome of `request`. Returns `false` when the result is
    /// stale and was discarded.
    pub fn apply(&mut self, request: &PageRequest, result: Result<SearchResult, ApiError>) -> bool {
        if !self.is_current(request) {
            log::debug!(
                "Discarding stale page (generation {} != {})",
                request.generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                if request.is_first_page() {
                    self.videos = page.items;
                } else {
                    self.videos.extend(page.items);
                }
                self.has_more = page.next_page_token.is_some();
                self.next_page_token = page.next_page_token;
                self.error = None;
            }
            Err(e) => {
                // Stop here so the scroll trigger does not immediately retry.
                self.has_more = false;
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    /// Invalidates anything still in flight; called when the view goes away.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Whether `request` still belongs to what is on screen.
    pub fn is_current(&self, request: &PageRequest) -> bool {
        request.generation == self.generation
    }

    fn start_first_page(&mut self) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        PageRequest {
            generation: self.generation,
            source: self.source.clone(),
            page_token: None,
        }
    }
}
