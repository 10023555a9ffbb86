use crate::youtube::error::TransportError;
use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

/// Query parameters of one request, in the order they are sent.
pub type Params = Vec<(&'static str, String)>;

#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, endpoint: &str, params: &Params) -> Result<Value, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

pub fn build_url(base_url: &str, endpoint: &str, params: &Params) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}{endpoint}?{query}", base_url.trim_end_matches('/'))
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, endpoint: &str, params: &Params) -> Result<Value, TransportError> {
        let url = build_url(&self.base_url, endpoint, params);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<Value>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        } else {
            Err(TransportError::Http {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
