//! Tests for structural validation of raw requests.

use replyforge::pipeline::{compile, validate};
use replyforge::types::RawPromptRequest;

fn request_from_json(json: &str) -> RawPromptRequest {
    serde_json::from_str(json).expect("request JSON should deserialize")
}

#[test]
fn every_mode_with_its_payload_is_valid() {
    let cases = [
        r#"{"tabType": "personas", "personaConfig": {"personality": "Cheerful"}}"#,
        r#"{"tabType": "all", "allTabConfig": {"personality": "Cheerful"}}"#,
        r#"{"tabType": "smart", "allTabConfig": {"personality": "Cheerful"}}"#,
        r#"{"tabType": "favorites", "allTabConfig": {"personality": "Cheerful"}}"#,
        r#"{"tabType": "custom", "customConfig": {"style": "s", "tone": "t", "length": "l"}}"#,
        r#"{"tabType": "image_gen"}"#,
    ];

    for json in cases {
        let result = validate(&request_from_json(json));
        assert!(result.is_valid, "{json} should be structurally valid");
        assert!(result.errors.is_empty());
    }
}

#[test]
fn every_mode_without_its_payload_names_itself() {
    let cases = [
        ("personas", "PERSONAS tab requires personaConfig"),
        ("all", "ALL tab requires allTabConfig"),
        ("smart", "SMART tab requires allTabConfig"),
        ("favorites", "FAVORITES tab requires allTabConfig"),
        ("custom", "CUSTOM tab requires customConfig"),
    ];

    for (tab, expected) in cases {
        let raw = request_from_json(&format!(r#"{{"tabType": "{tab}"}}"#));
        let result = validate(&raw);
        assert!(!result.is_valid, "{tab} without payload should be invalid");
        assert_eq!(result.errors, vec![expected.to_owned()]);
    }
}

#[test]
fn a_mismatched_payload_never_substitutes() {
    // A persona payload does not satisfy the SMART tab's requirement.
    let raw = request_from_json(
        r#"{"tabType": "smart", "personaConfig": {"personality": "Cheerful"}}"#,
    );

    let result = validate(&raw);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["SMART tab requires allTabConfig"]);
}

#[test]
fn unknown_tab_is_fatal_not_defaulted() {
    let raw = request_from_json(r#"{"tabType": "invalid_tab"}"#);

    let result = validate(&raw);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Invalid tab type \"invalid_tab\""]);

    let err = compile(&raw).expect_err("compile must also fail loudly");
    assert!(err.to_string().contains("Invalid tab type"));
}

#[test]
fn missing_tab_behaves_as_all() {
    // The sole silent fallback in the pipeline.
    let raw = request_from_json(r#"{"allTabConfig": {"personality": "Cheerful"}}"#);
    assert!(validate(&raw).is_valid);

    let without_payload = request_from_json("{}");
    let result = validate(&without_payload);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["ALL tab requires allTabConfig"]);
}

#[test]
fn compile_reports_the_same_error_as_validate() {
    let raw = request_from_json(r#"{"tabType": "smart"}"#);

    let validation = validate(&raw);
    let err = compile(&raw).expect_err("structurally invalid request");
    assert_eq!(validation.errors, vec![err.to_string()]);
}
