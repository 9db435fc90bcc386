//! Tunable parameters for the SDF text shading stage
//!
//! These values are owned by the application and passed by reference to the
//! frame sink each frame. Nothing in the merge path reads them.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Uniform values for signed-distance-field text shading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderParams {
    /// Base text color (RGB)
    pub color: [f32; 3],
    /// Overall opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Distance-field value treated as the glyph edge
    pub threshold: f32,
    /// Width of the anti-aliasing ramp around the edge
    pub smoothing: f32,
    /// Draw an outline around each glyph
    pub outline: bool,
    /// Outline width in distance-field units
    pub outline_width: f32,
    /// Outline color (RGB)
    pub outline_color: [f32; 3],
    /// Output the raw distance field instead of shaded text
    pub debug_distance_field: bool,
}

impl Default for ShaderParams {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            threshold: 0.5,
            smoothing: 0.1,
            outline: false,
            outline_width: 0.1,
            outline_color: [0.0, 0.0, 0.0],
            debug_distance_field: false,
        }
    }
}

impl Config for ShaderParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_toml_round_trip() {
        let params = ShaderParams {
            outline: true,
            smoothing: 0.25,
            ..ShaderParams::default()
        };
        let text = params.to_string_as(ConfigFormat::Toml).unwrap();
        let parsed = ShaderParams::from_str_as(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_ron_round_trip() {
        let params = ShaderParams {
            color: [0.2, 0.4, 0.6],
            outline_color: [1.0, 0.0, 0.0],
            debug_distance_field: true,
            ..ShaderParams::default()
        };
        let text = params.to_string_as(ConfigFormat::Ron).unwrap();
        let parsed = ShaderParams::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = ShaderParams::from_str_as("(opacity: 0.5)", ConfigFormat::Ron).unwrap();
        assert_eq!(parsed.opacity, 0.5);
        assert_eq!(parsed.threshold, ShaderParams::default().threshold);
    }
}
