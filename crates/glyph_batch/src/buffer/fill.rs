//! Cyclic broadcast fill

use super::{BufferError, BufferResult, Element};

/// Fill a buffer of `target_len` elements by repeating `pattern`
///
/// The pattern is written once, then the already-written prefix is copied
/// onto the end of itself, doubling the filled region each step until the
/// buffer is full. The last copy is truncated when it would overflow. The
/// result is identical to repeating `pattern` element by element and
/// cutting at `target_len`.
///
/// # Errors
///
/// Returns [`BufferError::InvalidArgument`] when `pattern` is empty or longer
/// than `target_len`.
///
/// # Example
///
/// ```
/// use glyph_batch::buffer::broadcast_fill;
///
/// let offsets = broadcast_fill(6, &[10.0f32, 20.0]).unwrap();
/// assert_eq!(offsets, vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
/// ```
pub fn broadcast_fill<T: Element>(target_len: usize, pattern: &[T]) -> BufferResult<Vec<T>> {
    if pattern.is_empty() {
        return Err(BufferError::InvalidArgument(
            "broadcast pattern must not be empty".to_string(),
        ));
    }
    if pattern.len() > target_len {
        return Err(BufferError::InvalidArgument(format!(
            "broadcast pattern of {} elements exceeds target length {}",
            pattern.len(),
            target_len
        )));
    }

    let mut out = vec![<T as bytemuck::Zeroable>::zeroed(); target_len];
    out[..pattern.len()].copy_from_slice(pattern);

    let mut filled = pattern.len();
    while filled < target_len {
        let chunk = filled.min(target_len - filled);
        out.copy_within(0..chunk, filled);
        filled += chunk;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_repeat<T: Element>(target_len: usize, pattern: &[T]) -> Vec<T> {
        pattern.iter().copied().cycle().take(target_len).collect()
    }

    #[test]
    fn test_matches_naive_repetition_when_divisible() {
        let pattern = [2.0f32, 7.5];
        for repeats in 1..=33 {
            let len = pattern.len() * repeats;
            assert_eq!(broadcast_fill(len, &pattern).unwrap(), naive_repeat(len, &pattern));
        }
    }

    #[test]
    fn test_truncates_final_chunk() {
        let pattern = [1u32, 2, 3];
        for len in 3..=40 {
            assert_eq!(broadcast_fill(len, &pattern).unwrap(), naive_repeat(len, &pattern));
        }
        assert_eq!(broadcast_fill(7, &pattern).unwrap(), vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_pattern_equal_to_target() {
        assert_eq!(broadcast_fill(2, &[4i32, 5]).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(matches!(
            broadcast_fill::<f32>(4, &[]),
            Err(BufferError::InvalidArgument(_))
        ));
        assert!(matches!(
            broadcast_fill(1, &[1.0f32, 2.0]),
            Err(BufferError::InvalidArgument(_))
        ));
        assert!(broadcast_fill::<u8>(0, &[]).is_err());
    }
}
