use crate::config::Config;
use crate::tools::{self, SearchPostsParams, TrendingParams, UserPostsParams};
use crate::xai::XaiClient;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

#[derive(Clone)]
pub struct XSearchServer {
    client: XaiClient,
}

impl XSearchServer {
    pub fn new(config: &Config) -> crate::error::Result<Self> {
        Ok(Self { client: XaiClient::new(config)? })
    }
}

// Validation failures are protocol errors; anything after validation comes
// back as a JSON `{"error": ..}` string in a successful result.
#[tool_router]
impl XSearchServer {
    #[tool(
        name = "x_search_posts",
        description = r#"
    Search for posts on X (Twitter) by keywords, hashtags, or topics.

    Uses xAI's Grok API with live X search to find recent and relevant posts
    matching the query.

    `max_results` limits the number of posts (1-30, default 10). `language`
    restricts results to one language code. `from_date` / `to_date` (YYYY-MM-DD)
    bound the search window. `response_format` is "markdown" (default) or "json".

    Returns the posts as markdown or JSON text, or a JSON object with an
    `error` key when the search failed.
    "#,
        annotations(
            title = "Search X (Twitter) Posts",
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn x_search_posts(&self, Parameters(params): Parameters<SearchPostsParams>) -> Result<String, McpError> {
        params.validate().map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(tools::search_posts(&self.client, &params).await)
    }

    #[tool(
        name = "x_get_user_posts",
        description = r#"
    Retrieve recent posts from a specific X (Twitter) account.

    `username` is the handle without the @ prefix. The search is restricted to
    that account. `topic_filter` narrows posts to one topic; `from_date` /
    `to_date` (YYYY-MM-DD) bound the window; `max_results` is 1-30 (default 10).

    Returns the posts as markdown or JSON text, or a JSON object with an
    `error` key when the lookup failed.
    "#,
        annotations(
            title = "Get X User's Recent Posts",
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn x_get_user_posts(&self, Parameters(params): Parameters<UserPostsParams>) -> Result<String, McpError> {
        params.validate().map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(tools::user_posts(&self.client, &params).await)
    }

    #[tool(
        name = "x_get_trending",
        description = r#"
    Get current trending topics and hashtags on X (Twitter).

    `region` limits trends to a region (e.g. "Japan"); omit it for global
    trends. `category` focuses on one kind of topic (e.g. "technology").

    Returns the trends with short explanations as markdown or JSON text, or a
    JSON object with an `error` key when the lookup failed.
    "#,
        annotations(
            title = "Get Trending Topics on X",
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn x_get_trending(&self, Parameters(params): Parameters<TrendingParams>) -> Result<String, McpError> {
        Ok(tools::trending(&self.client, &params).await)
    }
}

#[tool_handler(router = Self::tool_router())]
impl ServerHandler for XSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "x_search_mcp".into(),
                title: Some("X Search".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Search X (Twitter) posts, fetch a user's recent posts, or list trending topics. \
                 Results come from xAI Grok with live X search; failures are returned as JSON with an `error` key."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
