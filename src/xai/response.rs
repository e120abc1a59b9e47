use serde_json::Value;

/// The two shapes of `output` entry that carry display text.
#[derive(Debug, PartialEq)]
enum OutputItem<'a> {
    /// `{"type": "message", "content": [{"type": "output_text", "text": ..}, ..]}`
    Message(Vec<&'a str>),
    /// Any other entry with a string `text` field.
    Text(&'a str),
}

impl<'a> OutputItem<'a> {
    fn classify(item: &'a Value) -> Option<Self> {
        if item.get("type").and_then(Value::as_str) == Some("message") {
            let parts = item
                .get("content")
                .and_then(Value::as_array)
                .map(|content| {
                    content
                        .iter()
                        .filter(|c| c.get("type").and_then(Value::as_str) == Some("output_text"))
                        .filter_map(|c| c.get("text").and_then(Value::as_str))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            return Some(Self::Message(parts));
        }
        item.get("text").and_then(Value::as_str).map(Self::Text)
    }
}

/// Joins every output text in encounter order with `\n`.
///
/// When the envelope holds no text at all, the whole envelope comes back as
/// pretty-printed JSON instead. That is a convenience for responses made only
/// of tool-call items, not an error signal: the caller always gets something
/// to show.
pub fn extract_text(envelope: &Value) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for item in envelope.get("output").and_then(Value::as_array).into_iter().flatten() {
        match OutputItem::classify(item) {
            Some(OutputItem::Message(texts)) => parts.extend(texts),
            Some(OutputItem::Text(text)) => parts.push(text),
            None => {}
        }
    }

    if parts.is_empty() {
        tracing::debug!("No output text in response, returning raw envelope");
        return serde_json::to_string_pretty(envelope).unwrap_or_else(|_| envelope.to_string());
    }
    parts.join("\n")
}
