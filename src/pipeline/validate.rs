//! Structural validation of raw requests.
//!
//! Validation checks presence and shape only: the variant payload matching
//! the tab must exist, and the tab discriminant must be recognized. It does
//! NOT reject blank leaf fields. Those are the sanitizer's job, so a config
//! can be "valid" here and still have its fields replaced by defaults (or
//! rejected, for fields with no documented default) downstream.

use crate::pipeline::PipelineError;
use crate::types::{ModeTag, RawPromptRequest};

/// Outcome of [`validate`]: either valid, or a list of human-readable
/// diagnostics suitable for surfacing to the caller's UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when the request is structurally valid.
    pub is_valid: bool,
    /// Diagnostics, empty when valid.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A valid result with no diagnostics.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// An invalid result carrying one diagnostic.
    fn invalid(error: String) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
        }
    }
}

/// Parse the raw tab discriminant.
///
/// A missing discriminant is the one intentional silent default in the
/// pipeline: it is treated as the ALL tab, with a warning so the caller
/// that forgot to set it gets a diagnostic. Any unrecognized value is
/// fatal: a request must never be compiled under guessed semantics.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidTabType`] for any present-but-unknown
/// value, including the empty string.
pub fn parse_mode_tag(raw: Option<&str>) -> Result<ModeTag, PipelineError> {
    let Some(value) = raw else {
        tracing::warn!("request carries no tab type; falling back to the ALL tab");
        return Ok(ModeTag::All);
    };
    match value {
        "personas" => Ok(ModeTag::Personas),
        "all" => Ok(ModeTag::All),
        "smart" => Ok(ModeTag::Smart),
        "favorites" => Ok(ModeTag::Favorites),
        "custom" => Ok(ModeTag::Custom),
        "image_gen" => Ok(ModeTag::ImageGen),
        other => Err(PipelineError::InvalidTabType(other.to_owned())),
    }
}

/// Check that the payload required by the tab is present.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidTabType`] for an unrecognized tab and
/// [`PipelineError::MissingModeConfig`] when the matching payload is absent.
pub(crate) fn structural_check(raw: &RawPromptRequest) -> Result<ModeTag, PipelineError> {
    let tag = parse_mode_tag(raw.tab_type.as_deref())?;
    let present = match tag {
        ModeTag::Personas => raw.persona_config.is_some(),
        ModeTag::All | ModeTag::Smart | ModeTag::Favorites => raw.all_tab_config.is_some(),
        ModeTag::Custom => raw.custom_config.is_some(),
        ModeTag::ImageGen => true,
    };
    if present {
        Ok(tag)
    } else {
        Err(missing_payload(tag))
    }
}

/// The `"<TAB> tab requires <payload>"` error for a tab.
pub(crate) fn missing_payload(tag: ModeTag) -> PipelineError {
    PipelineError::MissingModeConfig {
        tab: tag.label(),
        payload: tag.required_payload().unwrap_or("config"),
    }
}

/// Validate a raw request's structure.
///
/// Never rejects blank leaf strings; a configuration that passes here may
/// still have fields substituted (or rejected) by the sanitizer.
pub fn validate(raw: &RawPromptRequest) -> ValidationResult {
    match structural_check(raw) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}
