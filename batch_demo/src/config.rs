//! Demo configuration

use glyph_batch::config::Config;
use glyph_batch::render::ShaderParams;
use glyph_batch::text::LayoutOptions;
use serde::{Deserialize, Serialize};

/// Top-level demo settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Animation settings
    pub animation: AnimationConfig,
    /// Options passed to the glyph layout engine
    pub layout: LayoutOptions,
    /// Values handed to the shading stage every frame
    pub shader: ShaderParams,
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of text instances in the batch
    pub instance_count: usize,
    /// Number of frames to simulate
    pub ticks: u32,
    /// Simulated time per frame (seconds)
    pub tick_seconds: f32,
    /// Horizontal spacing between instance columns
    pub column_spacing: f32,
    /// Vertical spacing between instance rows
    pub row_spacing: f32,
    /// Instances per row
    pub columns: usize,
    /// Vertical wave amplitude
    pub amplitude: f32,
    /// Wave frequency (cycles per second)
    pub frequency: f32,
    /// Resting scale
    pub base_scale: f32,
    /// Scale oscillation added on top of `base_scale`
    pub scale_pulse: f32,
    /// Seed for per-instance phase offsets
    pub seed: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            instance_count: 64,
            ticks: 120,
            tick_seconds: 1.0 / 60.0,
            column_spacing: 160.0,
            row_spacing: 48.0,
            columns: 8,
            amplitude: 12.0,
            frequency: 0.5,
            base_scale: 1.0,
            scale_pulse: 0.25,
            seed: 7,
        }
    }
}

impl Config for DemoConfig {}
