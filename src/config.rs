//! Emitter configuration module
//!
//! Defaults match the original behavior: messages resolve unknown codes to
//! 200 OK, errors to 500 Internal Server Error, and the headers identifying
//! the underlying runtime are stripped before the status line goes out.

use serde::Deserialize;

use crate::error::EmitError;

/// Configuration for a [`crate::emitter::ResponseEmitter`]
#[derive(Debug, Deserialize, Clone)]
pub struct EmitterConfig {
    /// Status used when a raw code from an untyped source is not in the
    /// catalog (message path)
    #[serde(default = "default_fallback_status")]
    pub fallback_status: u16,
    /// Status used when an error code is not in the catalog
    #[serde(default = "default_error_fallback_status")]
    pub error_fallback_status: u16,
    /// Implementation-identifying headers removed before the status line
    #[serde(default = "default_strip_headers")]
    pub strip_headers: Vec<String>,
    /// Pretty-print JSON bodies instead of the compact wire encoding
    #[serde(default)]
    pub pretty_json: bool,
}

const fn default_fallback_status() -> u16 {
    200
}

const fn default_error_fallback_status() -> u16 {
    500
}

fn default_strip_headers() -> Vec<String> {
    vec!["x-powered-by".to_string(), "server".to_string()]
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            fallback_status: default_fallback_status(),
            error_fallback_status: default_error_fallback_status(),
            strip_headers: default_strip_headers(),
            pretty_json: false,
        }
    }
}

impl EmitterConfig {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables prefixed with `RESPOND`
    /// override file values, and built-in defaults cover the rest.
    pub fn load_from(config_path: &str) -> Result<Self, EmitError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("RESPOND"))
            .set_default("fallback_status", 200)?
            .set_default("error_fallback_status", 500)?
            .set_default("pretty_json", false)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmitterConfig::default();
        assert_eq!(config.fallback_status, 200);
        assert_eq!(config.error_fallback_status, 500);
        assert!(config.strip_headers.contains(&"x-powered-by".to_string()));
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = EmitterConfig::load_from("no-such-config").unwrap();
        assert_eq!(config.fallback_status, 200);
        assert_eq!(config.error_fallback_status, 500);
    }
}
