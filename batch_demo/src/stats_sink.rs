//! Headless frame sink that records what a GPU upload would transfer

use glyph_batch::batch::{BatchVertexLayout, MergedAttributeSet};
use glyph_batch::render::{FrameSink, ShaderParams};

/// Frame sink that logs buffer sizes instead of drawing
#[derive(Debug, Default)]
pub struct StatsSink {
    frames: u64,
    bytes_uploaded: u64,
    peak_vertices: usize,
}

impl StatsSink {
    /// Frames received
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Total vertex and index bytes received
    pub const fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded
    }

    /// Largest vertex count seen in a single frame
    pub const fn peak_vertices(&self) -> usize {
        self.peak_vertices
    }
}

impl FrameSink for StatsSink {
    fn upload(
        &mut self,
        frame: &MergedAttributeSet,
        params: &ShaderParams,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vertices = frame.interleave();
        let indices = frame.index_buffer();
        let vertex_bytes = std::mem::size_of_val(vertices.as_slice());
        let index_bytes = indices.as_bytes().len();

        self.frames += 1;
        self.bytes_uploaded += (vertex_bytes + index_bytes) as u64;
        self.peak_vertices = self.peak_vertices.max(frame.vertex_count());

        log::trace!(
            "frame {}: {} vertices ({} B, stride {}), {} {} indices ({} B), outline={} smoothing={}",
            self.frames,
            frame.vertex_count(),
            vertex_bytes,
            BatchVertexLayout::stride(),
            frame.index_count(),
            indices.kind(),
            index_bytes,
            params.outline,
            params.smoothing
        );
        Ok(())
    }
}

