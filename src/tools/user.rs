use super::respond_or_error;
use super::schema::{
    any_integer, check_date, check_max_results, check_text, default_max_results, trimmed, trimmed_opt, ResponseFormat,
};
use crate::error::ValidationError;
use crate::xai::{build_search_config, SearchBackend};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const USERNAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPostsParams {
    /// X username without the @ prefix (e.g. "elonmusk", "OpenAI")
    #[serde(deserialize_with = "trimmed")]
    #[schemars(with = "String", length(min = 1, max = 50))]
    pub username: String,

    /// Maximum number of posts to return (1-30, default 10)
    #[serde(default = "default_max_results", deserialize_with = "any_integer")]
    #[schemars(with = "i64", range(min = 1, max = 30))]
    pub max_results: i64,

    /// Only posts related to this topic (e.g. "AI", "cybersecurity")
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub topic_filter: Option<String>,

    /// Earliest post date, YYYY-MM-DD
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub from_date: Option<String>,

    /// Latest post date, YYYY-MM-DD
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub to_date: Option<String>,

    /// "markdown" for readable text, "json" for structured data
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl UserPostsParams {
    #[cfg(test)]
    pub fn parse(args: serde_json::Value) -> Result<Self, ValidationError> {
        let params: Self = super::schema::from_args(args)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("username", &self.username, USERNAME_MAX_CHARS)?;
        check_max_results(self.max_results)?;
        check_date("from_date", self.from_date.as_deref())?;
        check_date("to_date", self.to_date.as_deref())
    }

    pub fn prompt(&self) -> String {
        let topic = self
            .topic_filter
            .as_deref()
            .map(|topic| format!(" Focus on posts related to: {topic}."))
            .unwrap_or_default();

        format!(
            "Find recent posts from X (Twitter) user @{username}.\n\
             Return up to {max} of their most recent posts.{topic}\n\
             For each post include: post text, date/time, and engagement metrics \
             (likes, reposts, replies) if available.\n\
             Format the output as {format}.",
            username = self.username,
            max = self.max_results,
            format = self.response_format.label(),
        )
    }
}

/// The search is always pinned to the requested account.
pub async fn user_posts<B: SearchBackend>(backend: &B, params: &UserPostsParams) -> String {
    tracing::info!(username = %params.username, max_results = params.max_results, "x_get_user_posts");
    let handles = [params.username.clone()];
    let search_config = build_search_config(
        params.from_date.as_deref(),
        params.to_date.as_deref(),
        Some(&handles[..]),
        None,
    );
    respond_or_error(backend, "x_get_user_posts", &params.prompt(), search_config.as_ref()).await
}
