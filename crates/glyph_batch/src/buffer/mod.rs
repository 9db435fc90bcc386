//! Typed-buffer utilities
//!
//! Fixed-width numeric array helpers with no knowledge of geometry:
//! contiguous concatenation, cyclic broadcast fill, index rebasing, and a
//! runtime-tagged buffer used where channels are handed to a renderer.

pub mod element;
pub mod concat;
pub mod fill;
pub mod attribute;

pub use element::{Element, ElementKind};
pub use concat::{concatenate, shift_indices};
pub use fill::broadcast_fill;
pub use attribute::AttributeBuffer;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors raised by the typed-buffer utilities
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Buffers of different element kinds were combined
    #[error("Element type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind of the first buffer in the sequence
        expected: ElementKind,
        /// Kind of the offending buffer
        found: ElementKind,
    },

    /// An argument violated the operation's preconditions
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
