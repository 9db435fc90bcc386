//! Math utilities and types
//!
//! Text instances live in a 2D plane, so only the 2D aliases are exposed.

pub use nalgebra::Vector2;

/// 2D vector type used for instance offsets, scales and glyph pen positions
pub type Vec2 = Vector2<f32>;

/// Flatten a 2D vector into the `[x, y]` pair layout used by vertex channels
pub fn vec2_pair(v: &Vec2) -> [f32; 2] {
    [v.x, v.y]
}
