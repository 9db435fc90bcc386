//! Text instance batching
//!
//! Builds per-instance vertex attributes and merges any number of text
//! instances into one set of buffers for a single indexed draw call.
//!
//! The whole batch is rebuilt from scratch on every call; nothing is cached
//! between frames.

pub mod instance;
pub mod merge;
pub mod vertex_layout;

pub use instance::{build_instance, InstanceAttributeSet};
pub use merge::{
    merge_batch, merge_instance_sets, merge_instances, BatchInstance, InstanceRange,
    MergedAttributeSet, VertexChannel,
};
pub use vertex_layout::{BatchVertex, BatchVertexLayout, VertexAttribute};

use crate::buffer::BufferError;

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors raised while building or merging a batch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// Parallel inputs disagree in length, an instance is malformed, or a count
    /// does not fit the index type
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A typed-buffer operation failed
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
