use std::env;
use std::str::FromStr;

use crate::utils::ConfigError;

/// Returns the value of the environment variable `key`.
/// If the variable is not set, returns the provided fallback value or an empty string if no fallback is provided.
pub fn get_env(key: &str, fallback: Option<&str>) -> String {
    env::var(key).unwrap_or_else(|_| fallback.unwrap_or("").to_string())
}

/// Reads `key` from the environment and parses it, keeping `fallback` when unset or blank.
pub fn parse_env<T: FromStr>(key: &'static str, fallback: T, expected: &'static str) -> Result<T, ConfigError> {
    parse_value(key, &get_env(key, None), fallback, expected)
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str, fallback: T, expected: &'static str) -> Result<T, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(fallback);
    }
    raw.parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_fallback() {
        let value = get_env("BROWNIAN_TEST_SURELY_UNSET_VARIABLE", Some("fallback"));
        assert_eq!(value, "fallback");
        assert_eq!(get_env("BROWNIAN_TEST_SURELY_UNSET_VARIABLE", None), "");
    }

    #[test]
    fn test_parse_value_uses_fallback_when_blank() {
        assert_eq!(parse_value("K", "", 220usize, "width").unwrap(), 220);
        assert_eq!(parse_value("K", "   ", 9.0f32, "gain").unwrap(), 9.0);
    }

    #[test]
    fn test_parse_value_parses_and_rejects() {
        assert_eq!(parse_value("K", " 80 ", 220usize, "width").unwrap(), 80);
        let err = parse_value("BROWNIAN_WIDTH", "wide", 220usize, "width").unwrap_err();
        assert_eq!(err.to_string(), "BROWNIAN_WIDTH=\"wide\" is not a valid width");
    }
}
