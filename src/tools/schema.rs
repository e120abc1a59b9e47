use crate::error::ValidationError;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const MAX_RESULTS_DEFAULT: i64 = 10;
const MAX_RESULTS_LIMIT: i64 = 30;

/// Only changes a phrase in the prompt; tools always return a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Markdown,
    Json,
}

impl ResponseFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "JSON",
        }
    }
}

pub(crate) fn default_max_results() -> i64 {
    MAX_RESULTS_DEFAULT
}

pub(crate) fn trimmed<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    String::deserialize(d).map(|s| s.trim().to_string())
}

/// Blank optional strings are treated as not given.
pub(crate) fn trimmed_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(d).map(|s| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Accepts any JSON integer so out-of-range counts reach `check_max_results`
/// and fail with the field name instead of a bare type error. Values beyond
/// `i64` saturate.
pub(crate) fn any_integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct IntegerVisitor;

    impl Visitor<'_> for IntegerVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }
    }

    d.deserialize_i64(IntegerVisitor)
}

/// Deserialise arguments the way the rmcp `Parameters` extractor does, with
/// serde failures reported as `Malformed`.
#[cfg(test)]
pub(crate) fn from_args<T: serde::de::DeserializeOwned>(args: serde_json::Value) -> Result<T, ValidationError> {
    serde_json::from_value(args).map_err(|e| ValidationError::Malformed(e.to_string()))
}

pub(crate) fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::field(field, "cannot be empty"));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::field(field, format!("exceeds {max} characters (got {len})")));
    }
    Ok(())
}

pub(crate) fn check_max_results(value: i64) -> Result<(), ValidationError> {
    if !(1..=MAX_RESULTS_LIMIT).contains(&value) {
        return Err(ValidationError::field(
            "max_results",
            format!("must be between 1 and {MAX_RESULTS_LIMIT} (got {value})"),
        ));
    }
    Ok(())
}

pub(crate) fn check_date(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = value else { return Ok(()) };
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ValidationError::field(field, format!("must be an ISO date (YYYY-MM-DD), got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_format_values() {
        assert_eq!(serde_json::to_value(ResponseFormat::Markdown).unwrap(), json!("markdown"));
        assert_eq!(serde_json::from_value::<ResponseFormat>(json!("json")).unwrap(), ResponseFormat::Json);
        assert_eq!(ResponseFormat::default(), ResponseFormat::Markdown);
        assert!(serde_json::from_value::<ResponseFormat>(json!("html")).is_err());
    }

    #[test]
    fn test_check_text() {
        assert!(check_text("query", "ok", 5).is_ok());
        assert!(check_text("query", "日本語です", 5).is_ok());
        assert_eq!(check_text("query", "", 5), Err(ValidationError::field("query", "cannot be empty")));
        assert!(check_text("query", "toolong", 5).unwrap_err().to_string().starts_with("query:"));
    }

    #[derive(Debug, Deserialize)]
    struct Count {
        #[serde(deserialize_with = "any_integer")]
        n: i64,
    }

    #[test]
    fn test_any_integer() {
        assert_eq!(serde_json::from_value::<Count>(json!({ "n": -1 })).unwrap().n, -1);
        assert_eq!(serde_json::from_value::<Count>(json!({ "n": 4294967296u64 })).unwrap().n, 4294967296);
        assert_eq!(serde_json::from_value::<Count>(json!({ "n": u64::MAX })).unwrap().n, i64::MAX);
        assert!(serde_json::from_value::<Count>(json!({ "n": 1.5 })).is_err());
        assert!(serde_json::from_value::<Count>(json!({ "n": "5" })).is_err());
    }

    #[test]
    fn test_check_max_results() {
        assert!(check_max_results(1).is_ok());
        assert!(check_max_results(30).is_ok());
        for n in [0, 31, -1, 1 << 32] {
            assert!(check_max_results(n).unwrap_err().to_string().starts_with("max_results:"));
        }
    }

    #[test]
    fn test_check_date() {
        assert!(check_date("from_date", None).is_ok());
        assert!(check_date("from_date", Some("2025-01-01")).is_ok());
        assert!(check_date("to_date", Some("2025-02-30")).unwrap_err().to_string().contains("to_date"));
        assert!(check_date("to_date", Some("yesterday")).is_err());
    }
}
