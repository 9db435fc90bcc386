//! # Glyph Batch
//!
//! Per-frame vertex buffer assembly for many independently animated
//! bitmap-font text instances.
//!
//! ## Features
//!
//! - **Typed Buffers**: generic concatenation and doubling broadcast fill
//! - **Glyph Layout**: BMFont-style descriptions to per-glyph quads
//! - **Instance Attributes**: per-vertex offset/scale broadcast
//! - **Batch Merge**: many instances into one indexed draw call
//! - **Frame Hand-off**: last-good buffers pushed to a rendering backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glyph_batch::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let font = FontDescription::load_from_file("resources/fonts/grid_mono.ron")?;
//!     let layout = TextLayout::new(font, LayoutOptions::default());
//!
//!     let texts = ["hello", "world"];
//!     let offsets = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 40.0)];
//!     let scales = [Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.5)];
//!
//!     let merged = merge_instances(&layout, &texts, &offsets, &scales)?;
//!     println!("{} vertices, {} indices", merged.vertex_count(), merged.index_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

pub mod foundation;
pub mod buffer;
pub mod text;
pub mod batch;
pub mod config;
pub mod render;

#[cfg(test)]
mod tests;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        batch::{
            build_instance, merge_batch, merge_instances, BatchError, BatchInstance,
            BatchVertex, BatchVertexLayout, InstanceAttributeSet, MergedAttributeSet,
        },
        buffer::{broadcast_fill, concatenate, AttributeBuffer, BufferError},
        config::{Config, ConfigError},
        foundation::math::Vec2,
        render::{FrameBuffers, FrameSink, ShaderParams},
        text::{
            FontDescription, FontError, GlyphAttributeSet, LayoutOptions, TextAlign, TextLayout,
            Winding,
        },
    };
}
