use serde::{Deserialize, Serialize};

use crate::filters::SATURATION_LIMIT;
use crate::utils::{ConfigError, parse_env};

/// Where filtered samples end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Signed bytes for a playback process such as `aplay`.
    Raw,
    /// One `#` row per sample, paced for a human reader.
    Visualize,
}

/// Per-run constants for the streaming loop and the terminal renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub mode: OutputMode,
    /// Terminal columns used by the visualizer.
    pub width: usize,
    /// Magnitude mapped onto the edge of the terminal.
    pub clip_level: f32,
    /// Pause between visualizer rows.
    pub sleep_ms: u64,
    /// Volume applied to raw output after filtering.
    pub output_gain: f32,
    /// Input bytes are divided by this before filtering.
    pub input_divisor: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            mode: OutputMode::Raw,
            width: 220,
            clip_level: SATURATION_LIMIT,
            sleep_ms: 10,
            output_gain: 9.0,
            input_divisor: 4.0,
        }
    }
}

impl StreamConfig {
    /// Defaults, overridden by any `BROWNIAN_*` environment variables that are set.
    pub fn from_env(mode: OutputMode) -> Result<Self, ConfigError> {
        let defaults = StreamConfig::default();
        let config = StreamConfig {
            mode,
            width: parse_env("BROWNIAN_WIDTH", defaults.width, "terminal width")?,
            clip_level: parse_env("BROWNIAN_CLIP_LEVEL", defaults.clip_level, "clip level")?,
            sleep_ms: parse_env("BROWNIAN_SLEEP_MS", defaults.sleep_ms, "pause in milliseconds")?,
            output_gain: parse_env("BROWNIAN_GAIN", defaults.output_gain, "output gain")?,
            input_divisor: parse_env("BROWNIAN_INPUT_DIVISOR", defaults.input_divisor, "input divisor")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make rendering or scaling meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(invalid("BROWNIAN_WIDTH", self.width.to_string(), "terminal width"));
        }
        if !(self.clip_level > 0.0 && self.clip_level.is_finite()) {
            return Err(invalid("BROWNIAN_CLIP_LEVEL", self.clip_level.to_string(), "clip level"));
        }
        if !(self.output_gain > 0.0 && self.output_gain.is_finite()) {
            return Err(invalid("BROWNIAN_GAIN", self.output_gain.to_string(), "output gain"));
        }
        if !(self.input_divisor > 0.0 && self.input_divisor.is_finite()) {
            return Err(invalid("BROWNIAN_INPUT_DIVISOR", self.input_divisor.to_string(), "input divisor"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::Invalid { key, value, expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tool_constants() {
        let config = StreamConfig::default();
        assert_eq!(config.mode, OutputMode::Raw);
        assert_eq!(config.width, 220);
        assert_eq!(config.clip_level, 128.0);
        assert_eq!(config.sleep_ms, 10);
        assert_eq!(config.output_gain, 9.0);
        assert_eq!(config.input_divisor, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let zero_width = StreamConfig { width: 0, ..StreamConfig::default() };
        assert!(zero_width.validate().is_err());

        let negative_gain = StreamConfig { output_gain: -1.0, ..StreamConfig::default() };
        assert!(negative_gain.validate().is_err());

        let nan_divisor = StreamConfig { input_divisor: f32::NAN, ..StreamConfig::default() };
        assert!(nan_divisor.validate().is_err());
    }

    #[test]
    fn test_config_serializes_for_logging() {
        let json = serde_json::to_value(StreamConfig {
            mode: OutputMode::Visualize,
            ..StreamConfig::default()
        })
        .unwrap();
        assert_eq!(json["mode"], "visualize");
        assert_eq!(json["width"], 220);
    }
}
