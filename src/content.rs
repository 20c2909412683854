//! Content negotiation module
//!
//! Maps content-type intents to concrete MIME strings and owns the per-intent
//! serialization strategy. The intent→MIME mapping is a bijection maintained
//! in a single `match`; adding an intent means adding both sides atomically.

use serde::Serialize;
use serde_json::Value;

use crate::error::EmitError;
use crate::sink::ResponseSink;

pub const MIME_JSON: &str = "application/json";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_PROBLEM_JSON: &str = "application/problem+json";

// Reserved MIME strings with no intent member yet
pub const MIME_HTML: &str = "text/html";
pub const MIME_XML: &str = "application/xml";
pub const MIME_PROBLEM_XML: &str = "application/problem+xml";

/// Abstract content-type intent for an outgoing response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Structured JSON body
    Json,
    /// Flattened plain-text body
    Text,
    /// Error-flavored JSON body (RFC 7807 style)
    Problem,
}

impl ContentType {
    /// All intents, in declaration order
    pub const ALL: [Self; 3] = [Self::Json, Self::Text, Self::Problem];

    /// Get the concrete MIME string for this intent
    ///
    /// # Examples
    /// ```
    /// use http_respond::content::ContentType;
    /// assert_eq!(ContentType::Json.mime(), "application/json");
    /// assert_eq!(ContentType::Text.mime(), "text/plain");
    /// ```
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Json => MIME_JSON,
            Self::Text => MIME_TEXT,
            Self::Problem => MIME_PROBLEM_JSON,
        }
    }
}

/// Replace any existing Content-Type header with the negotiated one
///
/// Idempotent: safe to call multiple times, the last call wins.
pub fn emit_content_type<S: ResponseSink>(sink: &mut S, content_type: ContentType) {
    sink.remove_header("content-type");
    sink.set_header("Content-Type", content_type.mime());
}

/// Serialize a payload according to the negotiated content type
///
/// `Json` and `Problem` use the JSON wire encoding; `Text` flattens the
/// serde value tree into a plain string. Payloads not representable in the
/// chosen format surface as [`EmitError::Serialize`].
pub fn serialize_body<T: Serialize>(
    payload: &T,
    content_type: ContentType,
    pretty: bool,
) -> Result<Vec<u8>, EmitError> {
    match content_type {
        ContentType::Json | ContentType::Problem => {
            if pretty {
                Ok(serde_json::to_vec_pretty(payload)?)
            } else {
                Ok(serde_json::to_vec(payload)?)
            }
        }
        ContentType::Text => {
            let value = serde_json::to_value(payload)?;
            Ok(flatten(&value).into_bytes())
        }
    }
}

/// Flatten a serde value tree into a plain-text string.
/// Object keys are emitted in sorted order, so the output is deterministic
/// for a given payload.
fn flatten(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| format!("{key}={}", flatten(val)))
            .collect::<Vec<_>>()
            .join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_intent_mime_bijection() {
        let approved: HashSet<&str> = [MIME_JSON, MIME_TEXT, MIME_PROBLEM_JSON]
            .into_iter()
            .collect();
        let mimes: HashSet<&str> = ContentType::ALL.iter().map(|ct| ct.mime()).collect();
        // No two intents share a MIME string
        assert_eq!(mimes.len(), ContentType::ALL.len());
        assert!(mimes.is_subset(&approved));
    }

    #[test]
    fn test_emit_content_type_overwrites() {
        let mut sink = BufferSink::new();
        emit_content_type(&mut sink, ContentType::Json);
        emit_content_type(&mut sink, ContentType::Text);
        assert_eq!(sink.header("content-type"), Some(MIME_TEXT));
        assert_eq!(sink.header_count("content-type"), 1);
    }

    #[test]
    fn test_serialize_json() {
        let payload = json!({"a": 1});
        let bytes = serialize_body(&payload, ContentType::Json, false).unwrap();
        assert_eq!(bytes, br#"{"a":1}"#);
    }

    #[test]
    fn test_serialize_problem_uses_json_encoding() {
        let payload = json!({"detail": "boom"});
        let json = serialize_body(&payload, ContentType::Json, false).unwrap();
        let problem = serialize_body(&payload, ContentType::Problem, false).unwrap();
        assert_eq!(json, problem);
    }

    #[test]
    fn test_serialize_text_flattens() {
        let payload = json!({"b": [1, 2], "a": "x"});
        let bytes = serialize_body(&payload, ContentType::Text, false).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "a=x; b=1, 2");
    }

    #[test]
    fn test_serialize_text_scalars() {
        assert_eq!(
            serialize_body(&json!(true), ContentType::Text, false).unwrap(),
            b"true"
        );
        assert_eq!(
            serialize_body(&json!("plain"), ContentType::Text, false).unwrap(),
            b"plain"
        );
    }
}
