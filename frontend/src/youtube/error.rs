use crate::youtube::raw::ApiErrorBody;

/// Failure below the API client: the request never produced a usable JSON body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Classified failure of a primary fetch, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("quota exhausted: {0}")]
    Quota(String),

    #[error("video not found")]
    NotFound,

    #[error("request failed: {0}")]
    Transient(String),
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Configuration(_) => "Access denied. Please check your API key configuration.",
            ApiError::Quota(_) => "Daily API limit reached. Please try again tomorrow.",
            ApiError::NotFound => "Video not found.",
            ApiError::Transient(_) => "An error occurred. Please try again later.",
        }
    }

    fn from_http(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map(|parsed| parsed.error)
            .unwrap_or_default();
        let message = if detail.message.is_empty() {
            body.to_string()
        } else {
            detail.message.clone()
        };
        let lowered = message.to_lowercase();
        let mentions = |needle: &str| {
            lowered.contains(needle)
                || detail
                    .errors
                    .iter()
                    .any(|e| e.reason.to_lowercase().contains(needle))
        };

        match status {
            403 | 429 if mentions("quota") || mentions("ratelimit") || mentions("rate limit") => {
                ApiError::Quota(message)
            }
            403 => ApiError::Configuration(message),
            400 if mentions("keyinvalid") || mentions("api key") => {
                ApiError::Configuration(message)
            }
            404 => ApiError::NotFound,
            _ => ApiError::Transient(format!("HTTP {status}: {message}")),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Http { status, body } => ApiError::from_http(status, &body),
            other => ApiError::Transient(other.to_string()),
        }
    }
}
