//! Tests for the caller-owned compilation cache.

use std::num::NonZeroUsize;

use replyforge::pipeline::{compile, PromptCache};
use replyforge::types::RawPromptRequest;

fn request_from_json(json: &str) -> RawPromptRequest {
    serde_json::from_str(json).expect("request JSON should deserialize")
}

fn smart_request(personality: &str) -> RawPromptRequest {
    request_from_json(&format!(
        r#"{{"tabType": "smart", "allTabConfig": {{"personality": "{personality}"}}}}"#
    ))
}

#[test]
fn cached_and_fresh_compilations_agree() {
    let mut cache = PromptCache::with_default_capacity();
    let raw = smart_request("Curious");

    let cached = cache.get_or_compile(&raw).expect("should compile");
    let fresh = compile(&raw).expect("should compile");
    assert_eq!(cached, fresh, "the cache must be transparent");

    let hit = cache.get_or_compile(&raw).expect("should hit");
    assert_eq!(hit, fresh);
    assert_eq!(cache.len(), 1);
}

#[test]
fn separate_caches_share_no_state() {
    // The cache is caller-owned, never a process-wide singleton.
    let mut first = PromptCache::with_default_capacity();
    let mut second = PromptCache::with_default_capacity();

    first
        .get_or_compile(&smart_request("Curious"))
        .expect("should compile");

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    second
        .get_or_compile(&smart_request("Curious"))
        .expect("should compile");
    assert_eq!(second.len(), 1);
}

#[test]
fn eviction_respects_the_configured_capacity() {
    let capacity = NonZeroUsize::new(3).expect("non-zero");
    let mut cache = PromptCache::new(capacity);

    for personality in ["one", "two", "three", "four", "five"] {
        cache
            .get_or_compile(&smart_request(personality))
            .expect("should compile");
    }

    assert_eq!(cache.len(), 3);
}

#[test]
fn structural_errors_pass_through_uncached() {
    let mut cache = PromptCache::with_default_capacity();
    let invalid = request_from_json(r#"{"tabType": "custom"}"#);

    let err = cache.get_or_compile(&invalid).expect_err("invalid request");
    assert_eq!(err.to_string(), "CUSTOM tab requires customConfig");
    assert!(cache.is_empty());

    // And the same request keeps failing identically on retry.
    let err = cache.get_or_compile(&invalid).expect_err("still invalid");
    assert_eq!(err.to_string(), "CUSTOM tab requires customConfig");
}
