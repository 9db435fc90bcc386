//! Batch merge engine
//!
//! Combines independently built instances into one vertex/index buffer set.
//! Every instance keeps local, zero-based indices until the merge, where a
//! rebased copy is made using the prefix sum of the vertex counts before it.
//! Because the bases are known up front, building instances does not depend
//! on their neighbours.

use super::instance::{build_instance, InstanceAttributeSet};
use super::vertex_layout::{interleave, BatchVertex};
use super::{BatchError, BatchResult};
use crate::buffer::{concatenate, shift_indices, AttributeBuffer};
use crate::foundation::math::Vec2;
use crate::text::{GlyphLayoutService, TextLayout};

/// One text instance to be drawn in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchInstance {
    /// Text content
    pub text: String,
    /// Translation applied to every vertex of the instance
    pub offset: Vec2,
    /// Scale applied to every vertex of the instance
    pub scale: Vec2,
}

impl BatchInstance {
    /// Create a batch instance
    pub fn new(text: impl Into<String>, offset: Vec2, scale: Vec2) -> Self {
        Self {
            text: text.into(),
            offset,
            scale,
        }
    }
}

/// Location of one instance inside the merged buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceRange {
    /// First vertex of the instance
    pub first_vertex: u32,
    /// Number of vertices
    pub vertex_count: u32,
    /// First index of the instance
    pub first_index: u32,
    /// Number of indices
    pub index_count: u32,
}

/// A named two-component float channel of a merged set
#[derive(Debug, Clone, Copy)]
pub struct VertexChannel<'a> {
    /// Attribute name as bound by the shader
    pub name: &'static str,
    /// Components per vertex
    pub components: usize,
    /// Channel data
    pub data: &'a [f32],
}

/// All instances of a batch merged into one set of buffers
///
/// `positions`, `uvs`, `offsets` and `scales` are vertex-aligned with two
/// floats per vertex. `indices` reference the merged vertex range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedAttributeSet {
    /// Glyph quad positions
    pub positions: Vec<f32>,
    /// Atlas texture coordinates
    pub uvs: Vec<f32>,
    /// Per-vertex instance offsets
    pub offsets: Vec<f32>,
    /// Per-vertex instance scales
    pub scales: Vec<f32>,
    /// Triangle list indices into the merged vertices
    pub indices: Vec<u32>,
    instances: Vec<InstanceRange>,
}

impl MergedAttributeSet {
    /// Total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Total number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the batch contains no geometry
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Where each instance landed, in input order
    pub fn instances(&self) -> &[InstanceRange] {
        &self.instances
    }

    /// The four vertex channels in shader location order
    pub fn vertex_channels(&self) -> [VertexChannel<'_>; 4] {
        [
            VertexChannel {
                name: "position",
                components: 2,
                data: &self.positions,
            },
            VertexChannel {
                name: "uv",
                components: 2,
                data: &self.uvs,
            },
            VertexChannel {
                name: "offset",
                components: 2,
                data: &self.offsets,
            },
            VertexChannel {
                name: "scale",
                components: 2,
                data: &self.scales,
            },
        ]
    }

    /// Index buffer in the narrowest type able to address every vertex
    ///
    /// Returns 16-bit indices when every index fits in `u16`. The index
    /// count is the same for both widths.
    pub fn index_buffer(&self) -> AttributeBuffer {
        let max_index = self.indices.iter().copied().max().unwrap_or(0);
        if max_index <= u32::from(u16::MAX) {
            AttributeBuffer::U16(self.indices.iter().map(|&i| i as u16).collect())
        } else {
            AttributeBuffer::U32(self.indices.clone())
        }
    }

    /// Pack the four channels into a single interleaved vertex stream
    pub fn interleave(&self) -> Vec<BatchVertex> {
        interleave(self)
    }
}

/// Merge already built instances, rebasing each instance's indices
///
/// An empty slice yields an empty set.
///
/// # Errors
///
/// - [`BatchError::InvalidArgument`] if an instance's channels are not
///   vertex-aligned, an index is out of its instance's vertex range, or the
///   total vertex count does not fit in `u32`
/// - [`BatchError::Buffer`] if a channel cannot be concatenated
pub fn merge_instance_sets(sets: &[InstanceAttributeSet]) -> BatchResult<MergedAttributeSet> {
    if sets.is_empty() {
        return Ok(MergedAttributeSet::default());
    }

    for (i, set) in sets.iter().enumerate() {
        check_instance(i, set)?;
    }

    let mut instances = Vec::with_capacity(sets.len());
    let mut vertex_total = 0u32;
    let mut index_total = 0u32;
    for set in sets {
        let vertex_count = to_u32(set.vertex_count(), "instance vertex count")?;
        let index_count = to_u32(set.index_count(), "instance index count")?;
        instances.push(InstanceRange {
            first_vertex: vertex_total,
            vertex_count,
            first_index: index_total,
            index_count,
        });
        vertex_total = vertex_total.checked_add(vertex_count).ok_or_else(|| {
            BatchError::InvalidArgument("merged vertex count overflows u32".to_string())
        })?;
        index_total = index_total.checked_add(index_count).ok_or_else(|| {
            BatchError::InvalidArgument("merged index count overflows u32".to_string())
        })?;
    }

    let shifted = sets
        .iter()
        .zip(&instances)
        .map(|(set, range)| shift_indices(&set.glyphs.indices, range.first_vertex))
        .collect::<Result<Vec<_>, _>>()?;

    let positions: Vec<&[f32]> = sets.iter().map(|s| s.glyphs.positions.as_slice()).collect();
    let uvs: Vec<&[f32]> = sets.iter().map(|s| s.glyphs.uvs.as_slice()).collect();
    let offsets: Vec<&[f32]> = sets.iter().map(|s| s.offsets.as_slice()).collect();
    let scales: Vec<&[f32]> = sets.iter().map(|s| s.scales.as_slice()).collect();

    let merged = MergedAttributeSet {
        positions: concatenate(&positions)?,
        uvs: concatenate(&uvs)?,
        offsets: concatenate(&offsets)?,
        scales: concatenate(&scales)?,
        indices: concatenate(&shifted)?,
        instances,
    };

    log::debug!(
        "Merged {} text instances: {} vertices, {} indices",
        sets.len(),
        merged.vertex_count(),
        merged.index_count()
    );

    Ok(merged)
}

/// Lay out and merge N text instances given as parallel sequences
///
/// Instance `i` is `texts[i]` placed at `offsets[i]` with `scales[i]`.
/// Instances appear in the merged buffers in input order.
///
/// # Errors
///
/// - [`BatchError::InvalidArgument`] if the three sequences differ in length;
///   nothing is built in that case
/// - any error from [`merge_instance_sets`]
pub fn merge_instances<S, T>(
    layout: &TextLayout<S>,
    texts: &[T],
    offsets: &[Vec2],
    scales: &[Vec2],
) -> BatchResult<MergedAttributeSet>
where
    S: GlyphLayoutService,
    T: AsRef<str>,
{
    if texts.len() != offsets.len() || texts.len() != scales.len() {
        return Err(BatchError::InvalidArgument(format!(
            "parallel inputs differ in length: {} texts, {} offsets, {} scales",
            texts.len(),
            offsets.len(),
            scales.len()
        )));
    }

    let sets = texts
        .iter()
        .zip(offsets)
        .zip(scales)
        .map(|((text, offset), scale)| build_instance(layout, text.as_ref(), *offset, *scale))
        .collect::<Result<Vec<_>, _>>()?;

    merge_instance_sets(&sets)
}

/// Lay out and merge a slice of [`BatchInstance`]s
///
/// # Errors
///
/// Same as [`merge_instance_sets`].
pub fn merge_batch<S: GlyphLayoutService>(
    layout: &TextLayout<S>,
    instances: &[BatchInstance],
) -> BatchResult<MergedAttributeSet> {
    let sets = instances
        .iter()
        .map(|instance| build_instance(layout, &instance.text, instance.offset, instance.scale))
        .collect::<Result<Vec<_>, _>>()?;

    merge_instance_sets(&sets)
}

/// Channels must hold one `[x, y]` pair per vertex and indices must stay
/// inside the instance's own vertices.
fn check_instance(position: usize, set: &InstanceAttributeSet) -> BatchResult<()> {
    let floats = set.glyphs.positions.len();
    if floats % 2 != 0 {
        return Err(BatchError::InvalidArgument(format!(
            "instance {position}: {floats} position floats is not a whole number of vertices"
        )));
    }

    let channels = [
        ("uv", set.glyphs.uvs.len()),
        ("offset", set.offsets.len()),
        ("scale", set.scales.len()),
    ];
    for (name, len) in channels {
        if len != floats {
            return Err(BatchError::InvalidArgument(format!(
                "instance {position}: {name} channel has {len} floats, expected {floats}"
            )));
        }
    }

    let vertex_count = set.vertex_count();
    if let Some(&index) = set.glyphs.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(BatchError::InvalidArgument(format!(
            "instance {position}: index {index} out of range for {vertex_count} vertices"
        )));
    }

    Ok(())
}

fn to_u32(value: usize, what: &str) -> BatchResult<u32> {
    u32::try_from(value)
        .map_err(|_| BatchError::InvalidArgument(format!("{what} {value} does not fit in u32")))
}
