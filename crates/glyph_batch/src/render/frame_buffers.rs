//! Per-frame rebuild with last-good retention

use super::ShaderParams;
use crate::batch::{merge_batch, BatchInstance, BatchResult, MergedAttributeSet};
use crate::text::{GlyphLayoutService, TextLayout};

/// Receiver of merged batches, implemented by a rendering backend
pub trait FrameSink {
    /// Upload `frame` and draw it with `params`
    ///
    /// # Errors
    ///
    /// Backend-specific upload or draw failures.
    fn upload(
        &mut self,
        frame: &MergedAttributeSet,
        params: &ShaderParams,
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Holds the most recent successfully merged batch
///
/// Each frame calls [`FrameBuffers::rebuild`]. A failed rebuild leaves the
/// previous frame's buffers in place so the renderer keeps drawing them.
#[derive(Debug, Default)]
pub struct FrameBuffers {
    current: Option<MergedAttributeSet>,
    frames_built: u64,
    frames_failed: u64,
}

impl FrameBuffers {
    /// Create an empty holder
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out and merge `instances`, replacing the held buffers on success
    ///
    /// # Errors
    ///
    /// Returns the merge error; the previously held buffers are kept.
    pub fn rebuild<S: GlyphLayoutService>(
        &mut self,
        layout: &TextLayout<S>,
        instances: &[BatchInstance],
    ) -> BatchResult<&MergedAttributeSet> {
        self.rebuild_with(|| merge_batch(layout, instances))
    }

    /// Run `merge` and keep its result if it succeeds
    ///
    /// # Errors
    ///
    /// Returns the error produced by `merge`; the previously held buffers are kept.
    pub fn rebuild_with<F>(&mut self, merge: F) -> BatchResult<&MergedAttributeSet>
    where
        F: FnOnce() -> BatchResult<MergedAttributeSet>,
    {
        match merge() {
            Ok(merged) => {
                self.frames_built += 1;
                Ok(self.current.insert(merged))
            }
            Err(e) => {
                self.frames_failed += 1;
                log::warn!(
                    "Batch rebuild failed, keeping previous frame ({} failures): {}",
                    self.frames_failed,
                    e
                );
                Err(e)
            }
        }
    }

    /// The buffers the renderer should draw, if any frame has been built
    pub const fn current(&self) -> Option<&MergedAttributeSet> {
        self.current.as_ref()
    }

    /// Number of successful rebuilds
    pub const fn frames_built(&self) -> u64 {
        self.frames_built
    }

    /// Number of failed rebuilds
    pub const fn frames_failed(&self) -> u64 {
        self.frames_failed
    }

    /// Hand the held buffers to `sink`
    ///
    /// Returns `Ok(false)` when nothing has been built yet.
    ///
    /// # Errors
    ///
    /// Propagates the sink's upload error.
    pub fn present(
        &self,
        sink: &mut dyn FrameSink,
        params: &ShaderParams,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let Some(frame) = &self.current else {
            return Ok(false);
        };
        sink.upload(frame, params)?;
        Ok(true)
    }
}
