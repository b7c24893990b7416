//! Engine configuration.
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! geometry = "legacy"
//!
//! [initial_adjustment]
//! hue = 0
//! saturation = 50
//! lightness = 0
//!
//! [decode]
//! require_signature = true
//!
//! [decode.limits]
//! max_dimension = 8192
//! max_pixels = 50000000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodeOptions;
use crate::ColorAdjustment;

/// Error types for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    /// The TOML could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// How rotations and flips address the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Run-reversal index formulas (see [`crate::transform`]).
    #[default]
    Legacy,
    /// Row-major quarter turns and mirrors.
    Conventional,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Adjustment in effect before the first recolor.
    pub initial_adjustment: ColorAdjustment,
    pub geometry: Geometry,
    pub decode: DecodeOptions,
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.initial_adjustment = ColorAdjustment::new(
            config.initial_adjustment.hue,
            config.initial_adjustment.saturation,
            config.initial_adjustment.lightness,
        );
        Ok(config)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.geometry, Geometry::Legacy);
        assert!(!config.decode.require_signature);
    }

    #[test]
    fn test_full_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            geometry = "conventional"

            [initial_adjustment]
            saturation = 50

            [decode]
            require_signature = true

            [decode.limits]
            max_dimension = 640
            "#,
        )
        .unwrap();

        assert_eq!(config.geometry, Geometry::Conventional);
        assert_eq!(config.initial_adjustment, ColorAdjustment::new(0, 50, 0));
        assert!(config.decode.require_signature);
        assert_eq!(config.decode.limits.max_dimension, 640);
        // Unset limit keeps its default
        assert_eq!(config.decode.limits.max_pixels, 268_435_456);
    }

    #[test]
    fn test_initial_hue_is_wrapped() {
        let config = EngineConfig::from_toml_str("[initial_adjustment]\nhue = 400\n").unwrap();
        assert_eq!(config.initial_adjustment.hue, 40);
    }

    #[test]
    fn test_invalid_geometry() {
        let err = EngineConfig::from_toml_str("geometry = \"diagonal\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("hueshift-missing-config.toml");
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("hueshift-config-{}.toml", std::process::id()));
        fs::write(&path, "geometry = \"conventional\"\n").unwrap();
        let config = EngineConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().geometry, Geometry::Conventional);
    }
}
