//! Animated text batch demo
//!
//! Simulates a grid of bobbing, pulsing text labels. Every frame the whole
//! batch is laid out and merged again, then handed to a headless sink that
//! stands in for the GPU upload.
//!
//! Usage, from `batch_demo/`: `text_wave [config.toml|config.ron] [font.ron]`

mod animation;
mod config;
mod stats_sink;

use glyph_batch::config::Config;
use glyph_batch::foundation::logging;
use glyph_batch::render::FrameBuffers;
use glyph_batch::text::{FontDescription, TextLayout};

use animation::WaveAnimation;
use config::DemoConfig;
use stats_sink::StatsSink;

const DEFAULT_CONFIG: &str = "resources/config/text_wave.toml";
const DEFAULT_FONT: &str = "resources/fonts/grid_mono.ron";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting text wave batch demo");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let font_path = args.next().unwrap_or_else(|| DEFAULT_FONT.to_string());

    let config = DemoConfig::load_or_default(&config_path)?;
    let font = FontDescription::load_from_file(&font_path)?;
    let layout = TextLayout::new(font, config.layout);

    let animation = WaveAnimation::new(config.animation.clone());
    let mut frames = FrameBuffers::new();
    let mut sink = StatsSink::default();

    for tick in 0..config.animation.ticks {
        let t = tick as f32 * config.animation.tick_seconds;
        let instances = animation.instances_at(t);

        // A failed rebuild keeps last frame's buffers; keep presenting them
        if let Err(e) = frames.rebuild(&layout, &instances) {
            log::error!("Frame {} rebuild failed: {}", tick, e);
        }
        frames.present(&mut sink, &config.shader)?;
    }

    log::info!(
        "Rendered {} frames ({} rebuild failures), peak {} vertices, {} bytes uploaded",
        sink.frames(),
        frames.frames_failed(),
        sink.peak_vertices(),
        sink.bytes_uploaded()
    );

    Ok(())
}
