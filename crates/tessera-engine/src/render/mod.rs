//! Rendering subsystem.
//!
//! Shapes own renderer-native buffers and submit them through a
//! [`DrawContext`]; backends decide what a submission does:
//! - `host` records it (headless)
//! - `gpu` issues it on a wgpu render pass
//!
//! Convention: model space is +Z up; the camera supplies view-projection.

pub mod backend;
mod buffers;
pub mod camera;
mod ctx;
mod drawable;
pub mod gpu;
pub mod host;
mod scope;
pub mod shapes;

pub use backend::{
    AttributeLayout, Backend, BufferFactory, DrawContext, IndexFormat, IndexedDraw, ScalarType,
    Topology, VertexAttribute,
};
pub use buffers::{ShapeBuffers, COLOR_LAYOUT, POSITION_LAYOUT};
pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
pub use drawable::Drawable;
pub use scope::AttributeScope;
