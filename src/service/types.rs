//! Wire types for the summarization backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /summarize`. The text is sent untrimmed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummarizeRequest<'a> {
    pub text: &'a str,
}

/// Reply to `POST /summarize`.
///
/// Only `summary` is read. It is kept as a raw JSON value because the
/// backend's reply is not validated: a missing field is tolerated and a
/// non-string value is shown as its JSON text.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<Value>,
}

impl SummarizeResponse {
    /// Reads a reply body. Any JSON is accepted except `null`; non-object
    /// values simply have no summary.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(mut map) => Some(Self {
                summary: map.remove("summary"),
            }),
            _ => Some(Self::default()),
        }
    }

    /// The summary as display text.
    pub fn into_text(self) -> Option<String> {
        match self.summary? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Reply to `GET /`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_text_only() {
        let body = serde_json::to_value(SummarizeRequest { text: "  padded  " }).unwrap();
        assert_eq!(body, json!({ "text": "  padded  " }));
    }

    #[test]
    fn test_string_summary_is_verbatim() {
        let resp = SummarizeResponse::from_value(json!({ "summary": "A fox story." })).unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("A fox story."));
    }

    #[test]
    fn test_missing_summary_is_absent() {
        let resp = SummarizeResponse::from_value(json!({ "error": "Text is required" })).unwrap();
        assert_eq!(resp.into_text(), None);
    }

    #[test]
    fn test_null_summary_is_absent() {
        let resp = SummarizeResponse::from_value(json!({ "summary": null })).unwrap();
        assert_eq!(resp.into_text(), None);
    }

    #[test]
    fn test_non_string_summary_shows_json_text() {
        let resp = SummarizeResponse::from_value(json!({ "summary": 42 })).unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("42"));
    }

    #[test]
    fn test_array_body_has_no_summary() {
        let resp = SummarizeResponse::from_value(json!(["summary"])).unwrap();
        assert_eq!(resp.into_text(), None);
    }

    #[test]
    fn test_null_body_is_rejected() {
        assert!(SummarizeResponse::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_health_status_parses() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "OK",
            "message": "Mindful AI Summarizer Backend is running"
        }))
        .unwrap();
        assert!(health.is_ok());
        assert!(health.message.is_some());
    }
}
