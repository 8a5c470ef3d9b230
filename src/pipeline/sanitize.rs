//! Configuration sanitization.
//!
//! Turns a structurally valid raw request into a [`PromptConfiguration`]
//! that is safe to compile: strings trimmed, documented defaults
//! substituted, temperatures clamped, malformed context entries dropped.
//! Leaf defects never abort a request here; only the structural guard
//! (re-run as a defense, with the validator's exact messages) can fail.

use crate::pipeline::temperature::{clamp_temperature, DEFAULT_TEMPERATURE};
use crate::pipeline::validate::{missing_payload, structural_check};
use crate::pipeline::PipelineError;
use crate::types::{
    ContextMode, CustomConfig, FourPartConfig, ModeConfig, ModeTag, PersonaConfig,
    PromptConfiguration, RawCustomConfig, RawFourPartConfig, RawPersonaConfig, RawPromptRequest,
    RawReplyContext, ReplyContext, ThreadEntry,
};

/// Default vocabulary style for the four-part payload.
pub const DEFAULT_VOCABULARY: &str = "Plain English with modern slang";
/// Default rhetorical approach for the four-part payload.
pub const DEFAULT_RHETORIC: &str = "Agree and build upon the original point";
/// Default length and pacing for the four-part payload.
pub const DEFAULT_LENGTH_PACING: &str = "Normal reply with 1-2 sentences";

/// Sanitize a raw request into a compilable configuration.
///
/// Assumes [`crate::pipeline::validate()`] already ran, but re-runs the same
/// structural guard itself (with identical error messages) rather than
/// compiling garbage.
///
/// Rules:
/// - `baseSystemPrompt` is trimmed; missing becomes empty.
/// - `baselineTemperature` and any custom override are clamped into
///   `[0.1, 1.0]`; non-finite values become the default baseline.
/// - Blank vocabulary / rhetoric / length-pacing fields get their
///   documented defaults. Fields with no documented default (personality,
///   and the custom style/tone/length) are required non-blank.
/// - Thread entries missing an author or text are dropped; blank image
///   entries are dropped; order is preserved in both cases.
/// - A `tweetText` is never invented: absence survives sanitization and
///   later drives no-context formatting.
///
/// # Errors
///
/// Returns the validator's structural errors, plus
/// [`PipelineError::BlankField`] for a blank field that has no documented
/// default.
pub fn sanitize(raw: &RawPromptRequest) -> Result<PromptConfiguration, PipelineError> {
    let tag = structural_check(raw)?;

    let mode = match tag {
        ModeTag::Personas => {
            let payload = raw.persona_config.as_ref().ok_or_else(|| missing_payload(tag))?;
            ModeConfig::Personas(sanitize_persona(tag, payload)?)
        }
        ModeTag::All => {
            let payload = raw.all_tab_config.as_ref().ok_or_else(|| missing_payload(tag))?;
            ModeConfig::All(sanitize_four_part(tag, payload)?)
        }
        ModeTag::Smart => {
            let payload = raw.all_tab_config.as_ref().ok_or_else(|| missing_payload(tag))?;
            ModeConfig::Smart(sanitize_four_part(tag, payload)?)
        }
        ModeTag::Favorites => {
            let payload = raw.all_tab_config.as_ref().ok_or_else(|| missing_payload(tag))?;
            ModeConfig::Favorites(sanitize_four_part(tag, payload)?)
        }
        ModeTag::Custom => {
            let payload = raw.custom_config.as_ref().ok_or_else(|| missing_payload(tag))?;
            ModeConfig::Custom(sanitize_custom(tag, payload)?)
        }
        ModeTag::ImageGen => ModeConfig::ImageGen,
    };

    Ok(PromptConfiguration {
        base_system_prompt: raw
            .base_system_prompt
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
        baseline_temperature: clamp_temperature(
            raw.baseline_temperature.unwrap_or(DEFAULT_TEMPERATURE),
        ),
        context_mode: ContextMode::from_raw(raw.context_mode.as_deref()),
        mode,
        context: sanitize_context(raw.context.as_ref()),
    })
}

/// Trimmed value, or `None` when missing or whitespace-only.
fn clean(value: Option<&String>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// A field with a documented default: blank falls back to the default.
fn field_or_default(value: Option<&String>, default: &str) -> String {
    clean(value).unwrap_or_else(|| default.to_owned())
}

/// A field with no documented default: blank is rejected.
fn required_field(
    tag: ModeTag,
    field: &'static str,
    value: Option<&String>,
) -> Result<String, PipelineError> {
    clean(value).ok_or(PipelineError::BlankField {
        tab: tag.label(),
        field,
    })
}

fn sanitize_persona(
    tag: ModeTag,
    raw: &RawPersonaConfig,
) -> Result<PersonaConfig, PipelineError> {
    Ok(PersonaConfig {
        personality: required_field(tag, "personality", raw.personality.as_ref())?,
        vocabulary: field_or_default(raw.vocabulary.as_ref(), DEFAULT_VOCABULARY),
        rhetoric_move: field_or_default(raw.rhetoric_move.as_ref(), DEFAULT_RHETORIC),
        length_pacing: field_or_default(raw.length_pacing.as_ref(), DEFAULT_LENGTH_PACING),
        system_prompt: raw
            .system_prompt
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
    })
}

fn sanitize_four_part(
    tag: ModeTag,
    raw: &RawFourPartConfig,
) -> Result<FourPartConfig, PipelineError> {
    Ok(FourPartConfig {
        personality: required_field(tag, "personality", raw.personality.as_ref())?,
        vocabulary: field_or_default(raw.vocabulary.as_ref(), DEFAULT_VOCABULARY),
        rhetoric: field_or_default(raw.rhetoric.as_ref(), DEFAULT_RHETORIC),
        length_pacing: field_or_default(raw.length_pacing.as_ref(), DEFAULT_LENGTH_PACING),
    })
}

fn sanitize_custom(tag: ModeTag, raw: &RawCustomConfig) -> Result<CustomConfig, PipelineError> {
    Ok(CustomConfig {
        style: required_field(tag, "style", raw.style.as_ref())?,
        tone: required_field(tag, "tone", raw.tone.as_ref())?,
        length: required_field(tag, "length", raw.length.as_ref())?,
        temperature: raw.temperature.map(clamp_temperature),
    })
}

/// Sanitize the scraped reply context. Always non-fatal: malformed entries
/// are dropped, never reported.
fn sanitize_context(raw: Option<&RawReplyContext>) -> ReplyContext {
    let Some(raw) = raw else {
        return ReplyContext::default();
    };

    let thread_entries = raw
        .thread_entries
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| {
            let author = clean(entry.author.as_ref())?;
            let text = clean(entry.text.as_ref())?;
            Some(ThreadEntry { author, text })
        })
        .collect();

    let images = raw
        .images
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| clean(entry.as_ref()))
        .collect();

    ReplyContext {
        tweet_text: clean(raw.tweet_text.as_ref()),
        author_handle: clean(raw.author_handle.as_ref()),
        thread_entries,
        images,
    }
}
