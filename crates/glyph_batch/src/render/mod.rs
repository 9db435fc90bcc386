//! Hand-off of merged batches to a rendering backend
//!
//! The backend itself lives outside this crate. It implements [`FrameSink`]
//! and receives, once per frame, the last successfully merged buffers
//! together with the shading parameters it should apply.

mod frame_buffers;
mod shader_params;

pub use frame_buffers::{FrameBuffers, FrameSink};
pub use shader_params::ShaderParams;
