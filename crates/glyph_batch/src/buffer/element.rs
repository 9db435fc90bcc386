//! Element types that typed buffers may hold

use std::fmt;

/// Runtime tag for a buffer's element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit float
    F32,
    /// 32-bit unsigned integer
    U32,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit signed integer
    I32,
    /// 8-bit unsigned integer
    U8,
}

impl ElementKind {
    /// Size of one element in bytes
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F32 | Self::U32 | Self::I32 => 4,
            Self::U16 => 2,
            Self::U8 => 1,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::F32 => "f32",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U8 => "u8",
        };
        f.write_str(name)
    }
}

/// Fixed-width numeric element that can be stored in a typed buffer
///
/// Bounded on [`bytemuck::Pod`] so every buffer can be viewed as raw bytes
/// for upload without copying.
pub trait Element: bytemuck::Pod + PartialEq + fmt::Debug {
    /// Runtime tag matching this type
    const KIND: ElementKind;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;
}

impl Element for u32 {
    const KIND: ElementKind = ElementKind::U32;
}

impl Element for u16 {
    const KIND: ElementKind = ElementKind::U16;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::I32;
}

impl Element for u8 {
    const KIND: ElementKind = ElementKind::U8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sizes_match_types() {
        assert_eq!(ElementKind::F32.size_in_bytes(), std::mem::size_of::<f32>());
        assert_eq!(ElementKind::U16.size_in_bytes(), std::mem::size_of::<u16>());
        assert_eq!(ElementKind::U8.size_in_bytes(), std::mem::size_of::<u8>());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(<u32 as Element>::KIND.to_string(), "u32");
    }
}
