//! Settings loading and management.
//!
//! Loads replyforge settings from `./replyforge.toml` (or
//! `$REPLYFORGE_CONFIG_PATH`). This is the stand-in for the extension's
//! storage layer: it supplies the baseline system prompt and baseline
//! temperature that every request inherits, plus runtime knobs for the
//! CLI.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level settings loaded from TOML.
///
/// Path: `./replyforge.toml` or `$REPLYFORGE_CONFIG_PATH`.
/// Env vars override file values; file values override defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prompt baselines shared by every request (`[prompt]`).
    pub prompt: PromptSettings,
    /// Runtime knobs for the CLI (`[runtime]`).
    pub runtime: RuntimeSettings,
}

impl Settings {
    /// Load settings with precedence: env vars > TOML file > defaults.
    ///
    /// If the file does not exist, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from_file()?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Load from the TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::settings_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading settings from file");
                let settings: Settings =
                    toml::from_str(&contents).context("failed to parse settings TOML")?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no settings file found, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read settings file: {e}")),
        }
    }

    /// Resolve the settings file path using a custom env resolver (for
    /// testing).
    fn settings_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        match env("REPLYFORGE_CONFIG_PATH") {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("replyforge.toml"),
        }
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability.
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("REPLYFORGE_BASE_PROMPT") {
            self.prompt.base_system_prompt = v;
        }
        if let Some(v) = env("REPLYFORGE_TEMPERATURE") {
            match v.parse() {
                Ok(n) => self.prompt.baseline_temperature = n,
                Err(_) => tracing::warn!(
                    var = "REPLYFORGE_TEMPERATURE",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("REPLYFORGE_LOG_LEVEL") {
            self.runtime.log_level = v;
        }
    }

    /// Parse a TOML string into settings (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML does not parse.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(toml_str).context("failed to parse settings TOML")?;
        Ok(settings)
    }
}

/// Prompt baselines (`[prompt]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// User-level custom instructions applied to every request.
    pub base_system_prompt: String,
    /// Default sampling temperature inherited by every mode except a
    /// CUSTOM override.
    pub baseline_temperature: f64,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            base_system_prompt: String::new(),
            baseline_temperature: crate::pipeline::temperature::DEFAULT_TEMPERATURE,
        }
    }
}

/// Runtime knobs (`[runtime]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Tracing log level filter.
    pub log_level: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
