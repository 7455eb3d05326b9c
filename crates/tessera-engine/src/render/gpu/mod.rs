//! wgpu backend.
//!
//! Buffers are immutable GPU buffers created through [`RenderCtx`](crate::render::RenderCtx);
//! drawing happens inside a render pass opened by [`ShapePipeline::begin`].

mod buffer;
mod context;
mod pipeline;

pub use buffer::{GpuBackend, GpuBuffer};
pub use context::GpuDrawContext;
pub use pipeline::ShapePipeline;
