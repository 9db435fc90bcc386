//! Contiguous concatenation of typed buffers

use super::{BufferError, BufferResult, Element};

/// Concatenate buffers of one element type into a single new buffer
///
/// Buffers are copied in order, each at the offset equal to the summed
/// lengths of the buffers before it. The element type is fixed by `T`, so
/// mixing kinds is rejected at compile time; see
/// [`AttributeBuffer::concatenate`](super::AttributeBuffer::concatenate) for
/// the runtime-tagged variant.
///
/// # Errors
///
/// Returns [`BufferError::InvalidArgument`] when `buffers` is empty.
///
/// # Example
///
/// ```
/// use glyph_batch::buffer::concatenate;
///
/// let merged = concatenate(&[vec![1u32, 2], vec![3]]).unwrap();
/// assert_eq!(merged, vec![1, 2, 3]);
/// ```
pub fn concatenate<T, B>(buffers: &[B]) -> BufferResult<Vec<T>>
where
    T: Element,
    B: AsRef<[T]>,
{
    if buffers.is_empty() {
        return Err(BufferError::InvalidArgument(
            "concatenate needs at least one buffer".to_string(),
        ));
    }

    let total: usize = buffers.iter().map(|b| b.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for buffer in buffers {
        out.extend_from_slice(buffer.as_ref());
    }

    Ok(out)
}

/// Return a copy of `indices` with `base` added to every value
///
/// Used to rebase an instance's local indices onto its first vertex in a
/// merged vertex buffer. The input is never modified.
///
/// # Errors
///
/// Returns [`BufferError::InvalidArgument`] if any shifted index would not fit
/// in a `u32`.
pub fn shift_indices(indices: &[u32], base: u32) -> BufferResult<Vec<u32>> {
    indices
        .iter()
        .map(|&index| {
            index.checked_add(base).ok_or_else(|| {
                BufferError::InvalidArgument(format!(
                    "index {index} shifted by {base} overflows u32"
                ))
            })
        })
        .collect()
}
