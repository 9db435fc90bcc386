//! Runtime-tagged attribute buffers
//!
//! The merge path works on `Vec<T>` with a fixed element type. A renderer
//! receiving channels by name does not know those types statically, so the
//! merged channels are handed over as [`AttributeBuffer`]s that carry their
//! element kind and can be viewed as raw bytes.

use super::{concatenate, BufferError, BufferResult, Element, ElementKind};

/// A typed buffer whose element kind is known only at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeBuffer {
    /// 32-bit float channel (positions, UVs, offsets, scales)
    F32(Vec<f32>),
    /// 32-bit index channel
    U32(Vec<u32>),
    /// 16-bit index channel
    U16(Vec<u16>),
}

impl AttributeBuffer {
    /// Element kind of this buffer
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::F32(_) => ElementKind::F32,
            Self::U32(_) => ElementKind::U32,
            Self::U16(_) => ElementKind::U16,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Self::F32(data) => data.len(),
            Self::U32(data) => data.len(),
            Self::U16(data) => data.len(),
        }
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw byte view for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::F32(data) => bytemuck::cast_slice(data),
            Self::U32(data) => bytemuck::cast_slice(data),
            Self::U16(data) => bytemuck::cast_slice(data),
        }
    }

    /// Borrow the contents as a slice of `T`, or `None` if the kind differs
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        if T::KIND != self.kind() {
            return None;
        }
        match self {
            Self::F32(data) => bytemuck::try_cast_slice(data).ok(),
            Self::U32(data) => bytemuck::try_cast_slice(data).ok(),
            Self::U16(data) => bytemuck::try_cast_slice(data).ok(),
        }
    }

    /// Concatenate buffers that must all share one element kind
    ///
    /// The kind of the first buffer is the expected kind for the rest.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] when `buffers` is empty
    /// - [`BufferError::TypeMismatch`] when any buffer's kind differs from the first
    pub fn concatenate(buffers: &[Self]) -> BufferResult<Self> {
        let first = buffers.first().ok_or_else(|| {
            BufferError::InvalidArgument("concatenate needs at least one buffer".to_string())
        })?;

        let expected = first.kind();
        if let Some(other) = buffers.iter().find(|b| b.kind() != expected) {
            return Err(BufferError::TypeMismatch {
                expected,
                found: other.kind(),
            });
        }

        Ok(match first {
            Self::F32(_) => Self::F32(concatenate(&Self::collect_f32(buffers))?),
            Self::U32(_) => Self::U32(concatenate(&Self::collect_u32(buffers))?),
            Self::U16(_) => Self::U16(concatenate(&Self::collect_u16(buffers))?),
        })
    }

    fn collect_f32(buffers: &[Self]) -> Vec<&[f32]> {
        buffers
            .iter()
            .filter_map(|b| match b {
                Self::F32(data) => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn collect_u32(buffers: &[Self]) -> Vec<&[u32]> {
        buffers
            .iter()
            .filter_map(|b| match b {
                Self::U32(data) => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn collect_u16(buffers: &[Self]) -> Vec<&[u16]> {
        buffers
            .iter()
            .filter_map(|b| match b {
                Self::U16(data) => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<f32>> for AttributeBuffer {
    fn from(data: Vec<f32>) -> Self {
        Self::F32(data)
    }
}

impl From<Vec<u32>> for AttributeBuffer {
    fn from(data: Vec<u32>) -> Self {
        Self::U32(data)
    }
}

impl From<Vec<u16>> for AttributeBuffer {
    fn from(data: Vec<u16>) -> Self {
        Self::U16(data)
    }
}
