//! Core types for the prompt compilation pipeline.
//!
//! Two layers, deliberately separate:
//!
//! - **Raw boundary types** (`Raw*`): what arrives over the untyped boundary
//!   (extension storage, message-passing). Every leaf is optional and every
//!   string is untrusted. These only exist to be validated and sanitized.
//! - **Sanitized value objects** ([`PromptConfiguration`] and friends): what
//!   the compiler actually consumes. The mode payload is a tagged union
//!   ([`ModeConfig`]), so "which payload is required" is enforced by the type
//!   system once sanitization has run.
//!
//! A `PromptConfiguration` is built fresh per generation request, flows once
//! through validate → sanitize → compile, and is discarded. It is never
//! persisted or mutated.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw boundary types
// ---------------------------------------------------------------------------

/// A reply-generation request as it arrives from the untyped boundary.
///
/// Field names follow the extension's JSON (`camelCase`). Nothing here is
/// trusted: leaves may be missing, blank, or nonsensical, and the variant
/// payloads may not match the tab type. Run [`crate::pipeline::validate()`]
/// and [`crate::pipeline::sanitize()`] before compiling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPromptRequest {
    /// User-level custom instructions, independent of tab.
    pub base_system_prompt: Option<String>,
    /// The user's configured default sampling temperature.
    pub baseline_temperature: Option<f64>,
    /// Context-formatting branch: `"none"`, `"single"`, or `"thread"`.
    pub context_mode: Option<String>,
    /// Tab discriminant: `"personas"`, `"all"`, `"smart"`, `"favorites"`,
    /// `"custom"`, or `"image_gen"`. A missing tab is treated as `"all"`.
    pub tab_type: Option<String>,
    /// Payload required by the `personas` tab.
    pub persona_config: Option<RawPersonaConfig>,
    /// Payload shared by the `all`, `smart`, and `favorites` tabs.
    pub all_tab_config: Option<RawFourPartConfig>,
    /// Payload required by the `custom` tab.
    pub custom_config: Option<RawCustomConfig>,
    /// What we are replying to, as scraped from the page.
    pub context: Option<RawReplyContext>,
}

/// Raw persona payload: an authored persona plus the four style fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPersonaConfig {
    /// Personality description. No default exists; blank is rejected.
    pub personality: Option<String>,
    /// Vocabulary style.
    pub vocabulary: Option<String>,
    /// Rhetorical approach.
    pub rhetoric_move: Option<String>,
    /// Length and pacing instructions.
    pub length_pacing: Option<String>,
    /// The persona's own system prompt text. May be empty.
    pub system_prompt: Option<String>,
}

/// Raw four-part payload used identically by three tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFourPartConfig {
    /// Personality description. No default exists; blank is rejected.
    pub personality: Option<String>,
    /// Vocabulary style.
    pub vocabulary: Option<String>,
    /// Rhetorical approach.
    pub rhetoric: Option<String>,
    /// Length and pacing instructions.
    pub length_pacing: Option<String>,
}

/// Raw custom payload: free-form style controls plus an optional
/// temperature override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCustomConfig {
    /// Writing style.
    pub style: Option<String>,
    /// Tone of voice.
    pub tone: Option<String>,
    /// Length instructions.
    pub length: Option<String>,
    /// Optional sampling temperature override. The only mode-level value
    /// that may ever diverge from the baseline temperature.
    pub temperature: Option<f64>,
}

/// Raw reply context as scraped from the page by the DOM layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReplyContext {
    /// Text of the tweet being replied to.
    pub tweet_text: Option<String>,
    /// Handle of the tweet's author, when the scraper found one.
    pub author_handle: Option<String>,
    /// Earlier tweets in the conversation, oldest first.
    pub thread_entries: Option<Vec<RawThreadEntry>>,
    /// Image references attached to the tweet. Entries may be null or blank.
    pub images: Option<Vec<Option<String>>>,
}

/// One scraped tweet in a conversation thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawThreadEntry {
    /// Author handle. Entries without one are dropped during sanitization.
    pub author: Option<String>,
    /// Tweet text. Entries without it are dropped during sanitization.
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Mode tags
// ---------------------------------------------------------------------------

/// The tab discriminant selecting which variant payload a request requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeTag {
    /// Authored persona tab.
    Personas,
    /// Main tab (also the fallback when no tab is set).
    All,
    /// Smart-suggestions tab. Prompt-identical to `All`.
    Smart,
    /// Favorites tab. Prompt-identical to `All`.
    Favorites,
    /// Free-form custom tab. The only tab that may override temperature.
    Custom,
    /// Image generation tab. Requires no payload and compiles to an empty
    /// system prompt.
    ImageGen,
}

impl ModeTag {
    /// Wire identifier as it appears in the raw request.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personas => "personas",
            Self::All => "all",
            Self::Smart => "smart",
            Self::Favorites => "favorites",
            Self::Custom => "custom",
            Self::ImageGen => "image_gen",
        }
    }

    /// Upper-cased tab name used in diagnostics ("SMART tab requires ...").
    pub fn label(self) -> &'static str {
        match self {
            Self::Personas => "PERSONAS",
            Self::All => "ALL",
            Self::Smart => "SMART",
            Self::Favorites => "FAVORITES",
            Self::Custom => "CUSTOM",
            Self::ImageGen => "IMAGE_GEN",
        }
    }

    /// Name of the raw payload field this tab requires, if any.
    pub fn required_payload(self) -> Option<&'static str> {
        match self {
            Self::Personas => Some("personaConfig"),
            Self::All | Self::Smart | Self::Favorites => Some("allTabConfig"),
            Self::Custom => Some("customConfig"),
            Self::ImageGen => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sanitized value objects
// ---------------------------------------------------------------------------

/// Sanitized persona payload. All style fields are non-blank;
/// `system_prompt` may legitimately be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaConfig {
    /// Personality description.
    pub personality: String,
    /// Vocabulary style.
    pub vocabulary: String,
    /// Rhetorical approach.
    pub rhetoric_move: String,
    /// Length and pacing instructions.
    pub length_pacing: String,
    /// The persona's own system prompt text, trimmed. May be empty.
    pub system_prompt: String,
}

/// Sanitized four-part payload. All fields are non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct FourPartConfig {
    /// Personality description.
    pub personality: String,
    /// Vocabulary style.
    pub vocabulary: String,
    /// Rhetorical approach.
    pub rhetoric: String,
    /// Length and pacing instructions.
    pub length_pacing: String,
}

/// Sanitized custom payload. All string fields are non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomConfig {
    /// Writing style.
    pub style: String,
    /// Tone of voice.
    pub tone: String,
    /// Length instructions.
    pub length: String,
    /// Clamped temperature override, when one was supplied.
    pub temperature: Option<f64>,
}

/// The mode payload as a tagged union. Exactly one variant per request;
/// exhaustive matching replaces the source's "one struct, many optional
/// sub-configs" shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeConfig {
    /// Personas tab with its authored payload.
    Personas(PersonaConfig),
    /// Main tab.
    All(FourPartConfig),
    /// Smart tab. Compiles identically to [`ModeConfig::All`].
    Smart(FourPartConfig),
    /// Favorites tab. Compiles identically to [`ModeConfig::All`].
    Favorites(FourPartConfig),
    /// Custom tab.
    Custom(CustomConfig),
    /// Image generation. Carries no payload.
    ImageGen,
}

impl ModeConfig {
    /// The tab this payload belongs to.
    pub fn tag(&self) -> ModeTag {
        match self {
            Self::Personas(_) => ModeTag::Personas,
            Self::All(_) => ModeTag::All,
            Self::Smart(_) => ModeTag::Smart,
            Self::Favorites(_) => ModeTag::Favorites,
            Self::Custom(_) => ModeTag::Custom,
            Self::ImageGen => ModeTag::ImageGen,
        }
    }
}

/// Which context-formatting branch the user prompt uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    /// No surrounding tweet; compose a standalone post.
    #[default]
    None,
    /// Replying to a single tweet.
    Single,
    /// Replying to the latest tweet of a multi-tweet thread.
    Thread,
}

impl ContextMode {
    /// Parse the raw wire string. Unknown or missing values fall back to
    /// [`ContextMode::None`]: context formatting degrades, it never aborts
    /// a request.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("single") => Self::Single,
            Some("thread") => Self::Thread,
            _ => Self::None,
        }
    }
}

/// One sanitized thread entry. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadEntry {
    /// Author handle.
    pub author: String,
    /// Tweet text.
    pub text: String,
}

/// Sanitized reply context. Thread entries and images contain only
/// well-formed values, in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyContext {
    /// Text of the tweet being replied to. Never invented: absent means
    /// the request formats as if there were no context.
    pub tweet_text: Option<String>,
    /// Handle of the latest tweet's author.
    pub author_handle: Option<String>,
    /// Surviving thread entries, oldest first.
    pub thread_entries: Vec<ThreadEntry>,
    /// Surviving image references.
    pub images: Vec<String>,
}

/// A validated, sanitized configuration, the only thing the compiler
/// accepts. Construct via [`crate::pipeline::sanitize()`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfiguration {
    /// Trimmed user-level custom instructions. May be empty.
    pub base_system_prompt: String,
    /// Clamped baseline sampling temperature.
    pub baseline_temperature: f64,
    /// Context-formatting branch.
    pub context_mode: ContextMode,
    /// The mode payload.
    pub mode: ModeConfig,
    /// Sanitized reply context.
    pub context: ReplyContext,
}

/// The compiled output triple handed to the chat-completion layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledPrompt {
    /// System-role message text. Empty for image generation.
    pub system_prompt: String,
    /// User-role message text.
    pub user_prompt: String,
    /// Effective sampling temperature.
    pub temperature: f64,
}
