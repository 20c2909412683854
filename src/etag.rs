//! Cache tag module
//!
//! Computes `ETag` values over the serialized payload bytes, or accepts a
//! caller-supplied override that controls the digest strategy.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::sink::ResponseSink;

/// Compute the cache tag for a serialized payload
///
/// Deterministic: identical bytes always produce the identical tag.
///
/// # Returns
/// Quoted tag string, e.g., `"abc123def"`
pub fn compute(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Emit the `ETag` header, replacing any prior one
///
/// When `override_fn` is supplied its return value is used verbatim as the
/// tag; otherwise the tag is computed from `content`. Must run before any
/// body byte is written, since the tag travels as a header.
pub fn emit_cache_tag<S: ResponseSink>(
    sink: &mut S,
    content: &[u8],
    override_fn: Option<&dyn Fn() -> String>,
) {
    let tag = match override_fn {
        Some(get_tag) => get_tag(),
        None => compute(content),
    };
    sink.set_header("ETag", &tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;

    #[test]
    fn test_compute_is_quoted() {
        let tag = compute(b"hello world");
        assert!(tag.starts_with('"'));
        assert!(tag.ends_with('"'));
        assert!(tag.len() > 2);
    }

    #[test]
    fn test_tag_consistency() {
        let tag1 = compute(b"same content");
        let tag2 = compute(b"same content");
        assert_eq!(tag1, tag2);
    }

    #[test]
    fn test_tag_difference() {
        let tag1 = compute(b"content a");
        let tag2 = compute(b"content b");
        assert_ne!(tag1, tag2);
    }

    #[test]
    fn test_emit_computed_tag() {
        let mut sink = BufferSink::new();
        emit_cache_tag(&mut sink, b"body", None);
        assert_eq!(sink.header("etag"), Some(compute(b"body").as_str()));
    }

    #[test]
    fn test_emit_override_tag_verbatim() {
        let mut sink = BufferSink::new();
        let custom = || String::from("\"v42\"");
        emit_cache_tag(&mut sink, b"body", Some(&custom));
        assert_eq!(sink.header("etag"), Some("\"v42\""));
    }

    #[test]
    fn test_emit_replaces_prior_tag() {
        let mut sink = BufferSink::new();
        emit_cache_tag(&mut sink, b"first", None);
        emit_cache_tag(&mut sink, b"second", None);
        assert_eq!(sink.header("etag"), Some(compute(b"second").as_str()));
        assert_eq!(sink.header_count("etag"), 1);
    }
}
