pub mod schema;
pub mod search;
pub mod trending;
pub mod user;

pub use search::{search_posts, SearchPostsParams};
pub use trending::{trending, TrendingParams};
pub use user::{user_posts, UserPostsParams};

use crate::error::format_error;
use crate::xai::{SearchBackend, SearchToolConfig};

/// The one place a failure turns into a tool result instead of propagating.
async fn respond_or_error<B: SearchBackend>(
    backend: &B,
    tool: &str,
    prompt: &str,
    search_config: Option<&SearchToolConfig>,
) -> String {
    match backend.respond(prompt, search_config).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(tool, kind = e.kind(), "Tool call failed: {}", e);
            format_error(&e)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::{Result, XSearchError};
    use crate::xai::{SearchBackend, SearchToolConfig};
    use std::sync::Mutex;

    /// Records every prompt and filter set it is asked to answer.
    #[derive(Default)]
    pub struct CaptureBackend {
        calls: Mutex<Vec<(String, Option<SearchToolConfig>)>>,
        fail_with: Option<fn() -> XSearchError>,
    }

    impl CaptureBackend {
        pub fn failing(make_err: fn() -> XSearchError) -> Self {
            Self { calls: Mutex::default(), fail_with: Some(make_err) }
        }

        pub fn calls(&self) -> Vec<(String, Option<SearchToolConfig>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SearchBackend for CaptureBackend {
        async fn respond(&self, prompt: &str, search_config: Option<&SearchToolConfig>) -> Result<String> {
            self.calls.lock().unwrap().push((prompt.to_string(), search_config.cloned()));
            match self.fail_with {
                Some(make_err) => Err(make_err()),
                None => Ok("mock response".into()),
            }
        }
    }
}
