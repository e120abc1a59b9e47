use serde::Serialize;

/// Filters forwarded to the backend's built-in X search tool. Only keys with
/// a value are serialised, so the struct merges straight into the tool object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchToolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_x_handles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_x_handles: Option<Vec<String>>,
}

/// Returns `None` rather than an empty config when no filter is set. Empty
/// strings and empty lists count as unset.
pub fn build_search_config(
    from_date: Option<&str>,
    to_date: Option<&str>,
    allowed_handles: Option<&[String]>,
    excluded_handles: Option<&[String]>,
) -> Option<SearchToolConfig> {
    let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
    let non_empty_list = |l: Option<&[String]>| l.filter(|l| !l.is_empty()).map(<[String]>::to_vec);

    let config = SearchToolConfig {
        from_date: non_empty(from_date),
        to_date: non_empty(to_date),
        allowed_x_handles: non_empty_list(allowed_handles),
        excluded_x_handles: non_empty_list(excluded_handles),
    };

    (config != SearchToolConfig::default()).then_some(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nothing_set_is_none() {
        assert_eq!(build_search_config(None, None, None, None), None);
    }

    #[test]
    fn test_empty_values_are_none() {
        assert_eq!(build_search_config(Some(""), Some(""), Some(&[][..]), Some(&[][..])), None);
    }

    #[test]
    fn test_from_date_only() {
        let config = build_search_config(Some("2025-01-01"), None, None, None).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "from_date": "2025-01-01" }));
    }

    #[test]
    fn test_to_date_only() {
        let config = build_search_config(None, Some("2025-12-31"), None, None).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "to_date": "2025-12-31" }));
    }

    #[test]
    fn test_handles() {
        let allowed = vec!["elonmusk".to_string()];
        let excluded = vec!["spambot".to_string()];

        let config = build_search_config(None, None, Some(allowed.as_slice()), None).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "allowed_x_handles": ["elonmusk"] }));

        let config = build_search_config(None, None, None, Some(excluded.as_slice())).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "excluded_x_handles": ["spambot"] }));
    }

    #[test]
    fn test_all_set() {
        let allowed = vec!["user1".to_string(), "user2".to_string()];
        let excluded = vec!["spam".to_string()];
        let config = build_search_config(Some("2025-01-01"), Some("2025-12-31"), Some(allowed.as_slice()), Some(excluded.as_slice())).unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "from_date": "2025-01-01",
                "to_date": "2025-12-31",
                "allowed_x_handles": ["user1", "user2"],
                "excluded_x_handles": ["spam"],
            })
        );
    }
}
