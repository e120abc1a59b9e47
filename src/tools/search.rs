use super::respond_or_error;
use super::schema::{
    any_integer, check_date, check_max_results, check_text, default_max_results, trimmed, trimmed_opt, ResponseFormat,
};
use crate::error::ValidationError;
use crate::xai::{build_search_config, SearchBackend};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const QUERY_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchPostsParams {
    /// Search query for X posts: keywords, hashtags, or natural language
    /// (e.g. "AI news today", "#python"). 1-500 characters.
    #[serde(deserialize_with = "trimmed")]
    #[schemars(with = "String", length(min = 1, max = 500))]
    pub query: String,

    /// Maximum number of posts to return (1-30, default 10)
    #[serde(default = "default_max_results", deserialize_with = "any_integer")]
    #[schemars(with = "i64", range(min = 1, max = 30))]
    pub max_results: i64,

    /// Language filter (e.g. "ja", "en"). Omit for all languages.
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub language: Option<String>,

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

impl SearchPostsParams {
    #[cfg(test)]
    pub fn parse(args: serde_json::Value) -> Result<Self, ValidationError> {
        let params: Self = super::schema::from_args(args)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("query", &self.query, QUERY_MAX_CHARS)?;
        check_max_results(self.max_results)?;
        check_date("from_date", self.from_date.as_deref())?;
        check_date("to_date", self.to_date.as_deref())
    }

    pub fn prompt(&self) -> String {
        let language = self
            .language
            .as_deref()
            .map(|lang| format!(" Filter to {lang} language posts only."))
            .unwrap_or_default();

        format!(
            "Search X (Twitter) for posts about: {query}\n\
             Return up to {max} recent and relevant posts.{language}\n\
             For each post include: author @username, display name, post text, \
             date/time, and engagement metrics (likes, reposts, replies) if available.\n\
             Format the output as {format}.",
            query = self.query,
            max = self.max_results,
            format = self.response_format.label(),
        )
    }
}

/// Date filters only; handle lists are left to the query itself.
pub async fn search_posts<B: SearchBackend>(backend: &B, params: &SearchPostsParams) -> String {
    tracing::info!(query = %params.query, max_results = params.max_results, "x_search_posts");
    let search_config = build_search_config(params.from_date.as_deref(), params.to_date.as_deref(), None, None);
    respond_or_error(backend, "x_search_posts", &params.prompt(), search_config.as_ref()).await
}
