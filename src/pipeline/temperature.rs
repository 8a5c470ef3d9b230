//! Effective sampling temperature resolution.
//!
//! One deliberate asymmetry lives here: only the CUSTOM tab may ever
//! diverge from the user's baseline temperature, and only through its
//! explicit override. Personas, the three four-part tabs, and image
//! generation always inherit the baseline, whatever mode-specific hints
//! they carry.

use crate::types::{ModeConfig, PromptConfiguration};

/// Lowest temperature a request may use. Values below are raised to this.
pub const TEMPERATURE_MIN: f64 = 0.1;
/// Highest temperature a request may use. The source exhibited only the
/// low-end clamp; the upper bound is the symmetric companion, matching the
/// API's sane range.
pub const TEMPERATURE_MAX: f64 = 1.0;
/// Baseline used when the stored temperature is missing or not a finite
/// number.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Clamp a temperature into `[TEMPERATURE_MIN, TEMPERATURE_MAX]`.
///
/// Non-finite input (NaN, ±inf) becomes [`DEFAULT_TEMPERATURE`]: the
/// resolved temperature must always be finite, and `f64::clamp` would let
/// NaN through.
pub fn clamp_temperature(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_TEMPERATURE;
    }
    value.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX)
}

/// Resolve the single effective temperature for a request.
///
/// CUSTOM with a defined override returns the override; every other case
/// (including CUSTOM without one) returns the baseline unchanged.
pub fn resolve_temperature(config: &PromptConfiguration) -> f64 {
    match &config.mode {
        ModeConfig::Custom(custom) => match custom.temperature {
            Some(override_value) => clamp_temperature(override_value),
            None => clamp_temperature(config.baseline_temperature),
        },
        ModeConfig::Personas(_)
        | ModeConfig::All(_)
        | ModeConfig::Smart(_)
        | ModeConfig::Favorites(_)
        | ModeConfig::ImageGen => clamp_temperature(config.baseline_temperature),
    }
}
