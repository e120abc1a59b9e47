use super::respond_or_error;
use super::schema::{trimmed_opt, ResponseFormat};
use crate::xai::SearchBackend;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TrendingParams {
    /// Region for trends (e.g. "Japan", "United States"). Omit for global trends.
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub region: Option<String>,

    /// Category filter (e.g. "technology", "politics", "sports")
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub category: Option<String>,

    /// "markdown" for readable text, "json" for structured data
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl TrendingParams {
    #[cfg(test)]
    pub fn parse(args: serde_json::Value) -> Result<Self, crate::error::ValidationError> {
        super::schema::from_args(args)
    }

    pub fn prompt(&self) -> String {
        let region = self
            .region
            .as_deref()
            .map(|region| format!(" in {region}"))
            .unwrap_or_else(|| " globally".into());
        let category = self
            .category
            .as_deref()
            .map(|category| format!(" Focus on {category} topics."))
            .unwrap_or_default();

        format!(
            "What are the current trending topics and hashtags on X (Twitter){region}?{category}\n\
             List the top trending topics with brief descriptions of why they're trending.\n\
             Format the output as {format}.",
            format = self.response_format.label(),
        )
    }
}

/// No search filters: the prompt carries every constraint.
pub async fn trending<B: SearchBackend>(backend: &B, params: &TrendingParams) -> String {
    tracing::info!(region = ?params.region, category = ?params.category, "x_get_trending");
    respond_or_error(backend, "x_get_trending", &params.prompt(), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XSearchError;
    use crate::tools::testing::CaptureBackend;
    use serde_json::{json, Value};

    #[test]
    fn test_defaults_only() {
        let p = TrendingParams::parse(json!({})).unwrap();
        assert_eq!(p.region, None);
        assert_eq!(p.category, None);
        assert_eq!(p.response_format, ResponseFormat::Markdown);
    }

    #[test]
    fn test_all_fields() {
        let p = TrendingParams::parse(json!({
            "region": " Japan ",
            "category": "technology",
            "response_format": "json",
        }))
        .unwrap();
        assert_eq!(p.region.as_deref(), Some("Japan"));
        assert_eq!(p.category.as_deref(), Some("technology"));
        assert_eq!(p.response_format, ResponseFormat::Json);
    }

    #[test]
    fn test_extra_field_rejected() {
        let err = TrendingParams::parse(json!({ "nope": "bad" })).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_global_prompt() {
        let prompt = TrendingParams::default().prompt();
        assert!(prompt.contains("on X (Twitter) globally?"));
        assert!(!prompt.contains("Focus on"));
        assert!(prompt.ends_with("Format the output as markdown."));
    }

    #[test]
    fn test_region_and_category_prompt() {
        let p = TrendingParams {
            region: Some("Japan".into()),
            category: Some("technology".into()),
            response_format: ResponseFormat::Json,
        };
        let prompt = p.prompt();
        assert!(prompt.contains("on X (Twitter) in Japan? Focus on technology topics.\n"));
        assert!(!prompt.contains("globally"));
        assert!(prompt.ends_with("Format the output as JSON."));
    }

    #[tokio::test]
    async fn test_no_search_config() {
        let backend = CaptureBackend::default();

        let result = trending(&backend, &TrendingParams::default()).await;

        assert_eq!(result, "mock response");
        let calls = backend.calls();
        assert!(calls[0].0.contains("globally"));
        assert_eq!(calls[0].1, None);
    }

    #[tokio::test]
    async fn test_error_returns_formatted_message() {
        let backend = CaptureBackend::failing(|| XSearchError::Timeout(60));

        let result = trending(&backend, &TrendingParams::default()).await;

        let v: Value = serde_json::from_str(&result).unwrap();
        assert!(v["error"].as_str().unwrap().contains("timed out"));
    }
}
