use super::response::extract_text;
use super::search_config::SearchToolConfig;
use crate::config::Config;
use crate::error::{Result, XSearchError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::{json, Map, Value};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: u64 = 10;
const X_SEARCH_TOOL: &str = "x_search";

/// Anything that can answer a prompt with the X search tool enabled.
pub trait SearchBackend {
    fn respond(
        &self,
        prompt: &str,
        search_config: Option<&SearchToolConfig>,
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct XaiClient {
    client: reqwest::Client,
    config: Config,
}

impl XaiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("x-search-mcp/{}", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT.min(config.timeout_secs)))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config: config.clone() })
    }

    /// One POST to the responses endpoint. Non-2xx statuses come back as
    /// `XSearchError::Api` with the raw body; nothing is retried.
    pub async fn call(&self, prompt: &str, search_config: Option<&SearchToolConfig>) -> Result<String> {
        let api_key = self.config.api_key()?;
        let url = format!("{}/responses", self.config.api_url);
        let body = request_body(&self.config.model, prompt, search_config)?;

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            filtered = search_config.is_some(),
            "Calling xAI responses API"
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_err(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error body: {}", e);
                String::new()
            });
            warn!(status = status.as_u16(), "xAI API request failed");
            return Err(XSearchError::Api { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await.map_err(|e| self.map_err(e))?;
        let envelope: Value = serde_json::from_slice(&bytes)?;
        Ok(extract_text(&envelope))
    }

    fn map_err(&self, e: reqwest::Error) -> XSearchError {
        if e.is_timeout() { XSearchError::Timeout(self.config.timeout_secs) } else { XSearchError::Http(e) }
    }
}

impl SearchBackend for XaiClient {
    async fn respond(&self, prompt: &str, search_config: Option<&SearchToolConfig>) -> Result<String> {
        self.call(prompt, search_config).await
    }
}

/// The prompt is the only user turn; filters are merged flat into the single
/// `x_search` tool object.
fn request_body(model: &str, prompt: &str, search_config: Option<&SearchToolConfig>) -> Result<Value> {
    let mut tool = Map::new();
    tool.insert("type".into(), Value::from(X_SEARCH_TOOL));
    if let Some(search_config) = search_config {
        if let Value::Object(filters) = serde_json::to_value(search_config)? {
            tool.extend(filters);
        }
    }

    Ok(json!({
        "model": model,
        "input": [{ "role": "user", "content": prompt }],
        "tools": [Value::Object(tool)],
    }))
}
