//! The prompt compilation pipeline: validate → sanitize → compile.
//!
//! A caller builds a [`RawPromptRequest`](crate::types::RawPromptRequest)
//! from UI selection state, runs it through this module, and receives the
//! `{system_prompt, user_prompt, temperature}` triple for the
//! chat-completion call. Structural defects (missing mode payload, unknown
//! tab) abort the request with a [`PipelineError`]; leaf defects (blank
//! strings, out-of-range temperatures, malformed context entries) are
//! corrected silently by the sanitizer.
//!
//! Every function here is pure and synchronous: no I/O, no shared state,
//! deterministic output for a given input. Concurrent callers never
//! interfere.

use thiserror::Error;

use crate::types::{CompiledPrompt, RawPromptRequest};

pub mod cache;
pub mod sanitize;
pub mod system_prompt;
pub mod temperature;
pub mod user_prompt;
pub mod validate;

pub use cache::PromptCache;
pub use sanitize::sanitize;
pub use system_prompt::build_system_prompt;
pub use temperature::resolve_temperature;
pub use user_prompt::build_user_prompt;
pub use validate::{validate, ValidationResult};

/// Fatal configuration errors. Each aborts a single generation request;
/// retrying with the same input cannot succeed, so none of these are
/// retried anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The variant payload required by the selected tab is missing.
    #[error("{tab} tab requires {payload}")]
    MissingModeConfig {
        /// Upper-cased tab name, e.g. `"SMART"`.
        tab: &'static str,
        /// Raw payload field name, e.g. `"allTabConfig"`.
        payload: &'static str,
    },
    /// The tab discriminant is not one of the supported values. A missing
    /// discriminant is NOT this error; it falls back to the ALL tab.
    #[error("Invalid tab type \"{0}\"")]
    InvalidTabType(String),
    /// A field with no documented default was blank in a required payload.
    #[error("{tab} tab requires a non-empty {field}")]
    BlankField {
        /// Upper-cased tab name.
        tab: &'static str,
        /// Offending field name.
        field: &'static str,
    },
}

/// Run the full pipeline on a raw request.
///
/// Equivalent to [`sanitize()`] followed by [`build_system_prompt`],
/// [`build_user_prompt`], and [`resolve_temperature`] on the result.
///
/// # Errors
///
/// Returns a [`PipelineError`] when the request is structurally invalid:
/// unknown tab type, missing mode payload, or a blank field that has no
/// documented default.
pub fn compile(raw: &RawPromptRequest) -> Result<CompiledPrompt, PipelineError> {
    let config = sanitize::sanitize(raw)?;
    Ok(CompiledPrompt {
        system_prompt: system_prompt::build_system_prompt(&config),
        user_prompt: user_prompt::build_user_prompt(&config),
        temperature: temperature::resolve_temperature(&config),
    })
}
