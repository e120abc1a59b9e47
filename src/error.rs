use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XSearchError {
    #[error("{0}")]
    MissingCredential(String),

    #[error("Configuration invalid: {0}")]
    ConfigInvalid(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

impl XSearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "MissingCredential",
            Self::ConfigInvalid(_) => "ConfigInvalid",
            Self::Http(_) => "HttpError",
            Self::JsonParse(_) => "JsonParseError",
            Self::Api { .. } => "ApiError",
            Self::Timeout(_) => "Timeout",
        }
    }
}

pub type Result<T> = std::result::Result<T, XSearchError>;

/// Rejection of a tool's input before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {reason}")]
    Field { field: &'static str, reason: String },

    /// Raised by deserialisation itself (unknown field, wrong type). In the
    /// server the rmcp extractor reports these before a handler runs.
    #[cfg(test)]
    #[error("Invalid parameters: {0}")]
    Malformed(String),
}

impl ValidationError {
    pub fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Field { field, reason: reason.into() }
    }
}

/// Renders any post-validation failure as the JSON string handed back to the
/// MCP client. Never fails; callers parse the result for an `error` key.
pub fn format_error(err: &XSearchError) -> String {
    let payload = match err {
        XSearchError::Api { status: 401, .. } => json!({
            "error": "Authentication failed. Check your XAI_API_KEY.",
            "status": 401,
        }),
        XSearchError::Api { status: 429, .. } => json!({
            "error": "Rate limit exceeded. Please wait before retrying.",
            "status": 429,
        }),
        XSearchError::Api { status, body } => json!({
            "error": format!("API request failed with status {status}"),
            "detail": serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.clone())),
        }),
        XSearchError::Timeout(_) => json!({ "error": "Request timed out. Try again later." }),
        XSearchError::Http(e) if e.is_timeout() => json!({ "error": "Request timed out. Try again later." }),
        XSearchError::MissingCredential(msg) => json!({ "error": msg }),
        other => json!({ "error": format!("Unexpected error: {}: {}", other.kind(), other) }),
    };
    payload.to_string()
}
