//! Interleaved vertex layout for merged text batches
//!
//! Renderers that prefer a single vertex buffer can upload
//! [`BatchVertex`] values directly. [`BatchVertexLayout`] describes the
//! attribute offsets without referring to any graphics API types, so each
//! backend can translate it into its own vertex input description.

use bytemuck::{Pod, Zeroable};

use super::merge::MergedAttributeSet;

/// One vertex of a merged text batch
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct BatchVertex {
    /// Glyph quad corner in layout space
    pub position: [f32; 2],
    /// Atlas texture coordinate
    pub uv: [f32; 2],
    /// Instance translation
    pub offset: [f32; 2],
    /// Instance scale
    pub scale: [f32; 2],
}

/// A single attribute inside [`BatchVertex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute name as bound by the shader
    pub name: &'static str,
    /// Shader input location
    pub location: u32,
    /// Number of `f32` components
    pub components: u32,
    /// Byte offset from the start of the vertex
    pub offset: u32,
}

/// Layout description of [`BatchVertex`]
pub struct BatchVertexLayout;

impl BatchVertexLayout {
    /// Distance in bytes between consecutive vertices
    pub const fn stride() -> u32 {
        std::mem::size_of::<BatchVertex>() as u32
    }

    /// Attribute descriptions in shader location order
    pub const fn attributes() -> [VertexAttribute; 4] {
        [
            // Position attribute (location = 0)
            VertexAttribute {
                name: "position",
                location: 0,
                components: 2,
                offset: 0,
            },
            // UV attribute (location = 1)
            VertexAttribute {
                name: "uv",
                location: 1,
                components: 2,
                offset: 8,
            },
            // Instance offset attribute (location = 2)
            VertexAttribute {
                name: "offset",
                location: 2,
                components: 2,
                offset: 16,
            },
            // Instance scale attribute (location = 3)
            VertexAttribute {
                name: "scale",
                location: 3,
                components: 2,
                offset: 24,
            },
        ]
    }
}

/// Pack the four channels of `set` into one vertex stream
pub fn interleave(set: &MergedAttributeSet) -> Vec<BatchVertex> {
    set.positions
        .chunks_exact(2)
        .zip(set.uvs.chunks_exact(2))
        .zip(set.offsets.chunks_exact(2))
        .zip(set.scales.chunks_exact(2))
        .map(|(((position, uv), offset), scale)| BatchVertex {
            position: [position[0], position[1]],
            uv: [uv[0], uv[1]],
            offset: [offset[0], offset[1]],
            scale: [scale[0], scale[1]],
        })
        .collect()
}
