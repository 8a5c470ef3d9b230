//! Tests for system prompt composition.

use replyforge::pipeline::{build_system_prompt, compile, sanitize};
use replyforge::types::RawPromptRequest;

fn request_from_json(json: &str) -> RawPromptRequest {
    serde_json::from_str(json).expect("request JSON should deserialize")
}

fn system_prompt_for(json: &str) -> String {
    let config = sanitize(&request_from_json(json)).expect("should sanitize");
    build_system_prompt(&config)
}

#[test]
fn equivalent_modes_compile_byte_identically() {
    let payload =
        r#"{"personality": "Upbeat", "vocabulary": "Casual", "rhetoric": "Build", "lengthPacing": "Short"}"#;

    let all = system_prompt_for(&format!(
        r#"{{"tabType": "all", "allTabConfig": {payload}}}"#
    ));
    let smart = system_prompt_for(&format!(
        r#"{{"tabType": "smart", "allTabConfig": {payload}}}"#
    ));
    let favorites = system_prompt_for(&format!(
        r#"{{"tabType": "favorites", "allTabConfig": {payload}}}"#
    ));

    assert_eq!(all, smart);
    assert_eq!(all, favorites);
}

#[test]
fn image_gen_system_prompt_is_empty() {
    let prompt = system_prompt_for(
        r#"{
            "tabType": "image_gen",
            "baseSystemPrompt": "Sound like me.",
            "baselineTemperature": 0.9,
            "context": {"tweetText": "Anything at all"}
        }"#,
    );

    assert_eq!(prompt, "");
}

#[test]
fn image_gen_never_contains_master_or_guardrail_text() {
    let empty = system_prompt_for(r#"{"tabType": "image_gen"}"#);
    let text_mode = system_prompt_for(
        r#"{"tabType": "all", "allTabConfig": {"personality": "Upbeat"}}"#,
    );

    // Sample phrases from both fixed blocks must exist in text modes and
    // nowhere in the image-gen output.
    assert!(text_mode.contains("real person"));
    assert!(text_mode.contains("Never reveal"));
    assert!(!empty.contains("real person"));
    assert!(!empty.contains("Never reveal"));
}

#[test]
fn descriptor_lines_carry_the_sanitized_values() {
    let prompt = system_prompt_for(
        r#"{
            "tabType": "personas",
            "personaConfig": {
                "personality": "Grumpy reviewer",
                "vocabulary": "Precise",
                "rhetoricMove": "Disagree politely",
                "lengthPacing": "Three sentences",
                "systemPrompt": "You review gadgets for a living."
            }
        }"#,
    );

    assert!(prompt.contains("You review gadgets for a living."));
    assert!(prompt.contains("Personality: Grumpy reviewer"));
    assert!(prompt.contains("Vocabulary style: Precise"));
    assert!(prompt.contains("Rhetorical approach: Disagree politely"));
    assert!(prompt.contains("Length and pacing: Three sentences"));
}

#[test]
fn custom_descriptor_uses_custom_labels() {
    let prompt = system_prompt_for(
        r#"{
            "tabType": "custom",
            "customConfig": {"style": "Minimal", "tone": "Earnest", "length": "One line"}
        }"#,
    );

    assert!(prompt.contains("Writing style: Minimal"));
    assert!(prompt.contains("Tone of voice: Earnest"));
    assert!(prompt.contains("Length instructions: One line"));
}

#[test]
fn compiled_prompts_never_leak_undefined() {
    // Structurally valid configs with blank defaulted leaves must compile
    // without ever interpolating a missing value.
    let cases = [
        r#"{"tabType": "all", "allTabConfig": {"personality": "P", "vocabulary": "", "rhetoric": "", "lengthPacing": ""}}"#,
        r#"{"tabType": "personas", "personaConfig": {"personality": "P"}}"#,
        r#"{"tabType": "image_gen"}"#,
    ];

    for json in cases {
        let compiled = compile(&request_from_json(json)).expect("should compile");
        assert!(
            !compiled.system_prompt.contains("undefined"),
            "system prompt must not leak placeholders: {json}"
        );
        assert!(
            !compiled.user_prompt.contains("undefined"),
            "user prompt must not leak placeholders: {json}"
        );
    }
}

#[test]
fn base_prompt_appears_once_between_master_and_descriptor() {
    let prompt = system_prompt_for(
        r#"{
            "tabType": "all",
            "baseSystemPrompt": "Mention the weather.",
            "allTabConfig": {"personality": "Upbeat"}
        }"#,
    );

    assert_eq!(prompt.matches("Mention the weather.").count(), 1);
    let base_at = prompt.find("Mention the weather.").expect("base prompt");
    let descriptor_at = prompt.find("Personality:").expect("descriptor");
    assert!(base_at < descriptor_at);
}
