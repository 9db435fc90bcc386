//! Per-frame offset and scale animation for the demo instances

use glyph_batch::batch::BatchInstance;
use glyph_batch::foundation::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AnimationConfig;

const WORDS: [&str; 8] = [
    "glyph", "batch", "Wave", "SDF text", "AVATAR", "Too late", "0123456789", "Hello, world!",
];

/// A text instance with a fixed grid slot and wave phase
struct AnimatedText {
    text: String,
    home: Vec2,
    phase: f32,
}

/// Drives the offsets and scales of every instance over time
pub struct WaveAnimation {
    config: AnimationConfig,
    texts: Vec<AnimatedText>,
}

impl WaveAnimation {
    /// Lay instances out on a grid with seeded random phases
    pub fn new(config: AnimationConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let columns = config.columns.max(1);

        let texts = (0..config.instance_count)
            .map(|i| AnimatedText {
                text: WORDS[i % WORDS.len()].to_string(),
                home: Vec2::new(
                    (i % columns) as f32 * config.column_spacing,
                    (i / columns) as f32 * config.row_spacing,
                ),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();

        Self { config, texts }
    }

    /// Instance offsets and scales at time `t` seconds
    pub fn instances_at(&self, t: f32) -> Vec<BatchInstance> {
        let omega = std::f32::consts::TAU * self.config.frequency;

        self.texts
            .iter()
            .map(|item| {
                let wave = (omega * t + item.phase).sin();
                let offset = item.home + Vec2::new(0.0, wave * self.config.amplitude);
                let s = self.config.base_scale + wave * self.config.scale_pulse;
                BatchInstance::new(item.text.clone(), offset, Vec2::new(s, s))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_frame() {
        let a = WaveAnimation::new(AnimationConfig::default());
        let b = WaveAnimation::new(AnimationConfig::default());
        assert_eq!(a.instances_at(0.75), b.instances_at(0.75));
    }

    #[test]
    fn test_instance_count_and_grid() {
        let config = AnimationConfig {
            instance_count: 10,
            columns: 4,
            amplitude: 0.0,
            ..AnimationConfig::default()
        };
        let instances = WaveAnimation::new(config.clone()).instances_at(1.0);
        assert_eq!(instances.len(), 10);
        assert_eq!(instances[5].offset, Vec2::new(config.column_spacing, config.row_spacing));
    }
}
