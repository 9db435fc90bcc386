//! Per-instance attribute building

use crate::buffer::{broadcast_fill, BufferResult};
use crate::foundation::math::{vec2_pair, Vec2};
use crate::text::{GlyphAttributeSet, GlyphLayoutService, TextLayout};

/// Glyph geometry of one text instance plus its broadcast offset and scale
///
/// `offsets` and `scales` carry one `[x, y]` pair per vertex, so both have
/// the same length as `glyphs.positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceAttributeSet {
    /// Local glyph geometry
    pub glyphs: GlyphAttributeSet,
    /// Instance offset repeated for every vertex
    pub offsets: Vec<f32>,
    /// Instance scale repeated for every vertex
    pub scales: Vec<f32>,
}

impl InstanceAttributeSet {
    /// Attach an offset and scale to already laid-out glyphs
    ///
    /// # Errors
    ///
    /// Propagates [`BufferError`](crate::buffer::BufferError) from the
    /// broadcast fill; cannot fail for geometry that satisfies the
    /// [`GlyphAttributeSet`] invariants.
    pub fn from_glyphs(glyphs: GlyphAttributeSet, offset: Vec2, scale: Vec2) -> BufferResult<Self> {
        debug_assert!(glyphs.is_consistent(), "glyph channels out of sync");

        let target_len = glyphs.positions.len();
        if target_len == 0 {
            return Ok(Self {
                glyphs,
                offsets: Vec::new(),
                scales: Vec::new(),
            });
        }

        let offsets = broadcast_fill(target_len, &vec2_pair(&offset))?;
        let scales = broadcast_fill(target_len, &vec2_pair(&scale))?;

        Ok(Self {
            glyphs,
            offsets,
            scales,
        })
    }

    /// Number of vertices in this instance
    pub fn vertex_count(&self) -> usize {
        self.glyphs.vertex_count()
    }

    /// Number of indices in this instance
    pub fn index_count(&self) -> usize {
        self.glyphs.indices.len()
    }
}

/// Lay out `text` and broadcast `offset` / `scale` across its vertices
///
/// # Errors
///
/// Propagates [`BufferError`](crate::buffer::BufferError) from the
/// broadcast fill.
pub fn build_instance<S: GlyphLayoutService>(
    layout: &TextLayout<S>,
    text: &str,
    offset: Vec2,
    scale: Vec2,
) -> BufferResult<InstanceAttributeSet> {
    InstanceAttributeSet::from_glyphs(layout.layout_text(text), offset, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vertex_glyphs() -> GlyphAttributeSet {
        GlyphAttributeSet {
            positions: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            uvs: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_offset_and_scale_broadcast() {
        let instance = InstanceAttributeSet::from_glyphs(
            three_vertex_glyphs(),
            Vec2::new(10.0, 20.0),
            Vec2::new(2.0, 2.0),
        )
        .unwrap();

        assert_eq!(instance.offsets, vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
        assert_eq!(instance.scales, vec![2.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
        assert_eq!(instance.offsets.len(), instance.glyphs.positions.len());
        assert_eq!(instance.vertex_count(), 3);
        assert_eq!(instance.index_count(), 3);
    }

    #[test]
    fn test_empty_glyphs_give_empty_instance() {
        let instance = InstanceAttributeSet::from_glyphs(
            GlyphAttributeSet::default(),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
        )
        .unwrap();
        assert!(instance.offsets.is_empty());
        assert!(instance.scales.is_empty());
        assert_eq!(instance.vertex_count(), 0);
    }
}
