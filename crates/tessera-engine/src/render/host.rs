//! CPU-side backend.
//!
//! Buffers are shared immutable slices and the draw context records every
//! call instead of executing it. Used for headless verification of the draw
//! contract (no GPU, no window).

use std::cell::Cell;
use std::ops::Deref;
use std::sync::Arc;

use super::backend::{
    AttributeLayout, Backend, BufferFactory, DrawContext, IndexedDraw, VertexAttribute,
};

/// Read-only buffer living in host memory. Clones share the allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct HostBuffer<T>(Arc<[T]>);

impl<T> HostBuffer<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// True if both handles refer to the same allocation.
    #[inline]
    pub fn same_allocation(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> From<&[T]> for HostBuffer<T> {
    fn from(data: &[T]) -> Self {
        Self(Arc::from(data))
    }
}

impl<T> Deref for HostBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HostBackend;

impl Backend for HostBackend {
    type FloatBuffer = HostBuffer<f32>;
    type IndexBuffer = HostBuffer<u16>;
}

/// Copies numeric sequences into [`HostBuffer`]s and counts how many it made.
#[derive(Debug, Default)]
pub struct HostBufferFactory {
    created: Cell<usize>,
}

impl HostBufferFactory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers materialized so far.
    #[inline]
    pub fn buffers_created(&self) -> usize {
        self.created.get()
    }

    fn bump(&self, label: &str, len: usize) {
        self.created.set(self.created.get() + 1);
        log::trace!("host buffer '{label}' ({len} elements)");
    }
}

impl BufferFactory for HostBufferFactory {
    type Backend = HostBackend;

    fn make_float_buffer(&self, label: &str, data: &[f32]) -> HostBuffer<f32> {
        self.bump(label, data.len());
        HostBuffer::from(data)
    }

    fn make_index_buffer(&self, label: &str, data: &[u16]) -> HostBuffer<u16> {
        self.bump(label, data.len());
        HostBuffer::from(data)
    }
}

/// One recorded draw-context call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    AttributePointer {
        attribute: VertexAttribute,
        layout: AttributeLayout,
        buffer: HostBuffer<f32>,
    },
    Enable(VertexAttribute),
    Disable(VertexAttribute),
    DrawIndexed {
        draw: IndexedDraw,
        indices: HostBuffer<u16>,
        /// Attributes enabled when the draw was issued.
        enabled: Vec<VertexAttribute>,
    },
}

/// Draw context that records calls in submission order.
///
/// Tracks the enable flags like a real context would, so callers can check
/// that nothing stays enabled after a shape has drawn.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    enabled: u8,
}

impl CommandRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the recorded commands and starts a new recording.
    /// Enable state is kept, as on a real context.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[inline]
    pub fn is_enabled(&self, attribute: VertexAttribute) -> bool {
        self.enabled & attribute.bit() != 0
    }

    pub fn enabled_attributes(&self) -> Vec<VertexAttribute> {
        VertexAttribute::ALL
            .into_iter()
            .filter(|&a| self.is_enabled(a))
            .collect()
    }

    /// Recorded indexed draws only.
    pub fn draw_calls(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawIndexed { .. }))
    }
}

impl DrawContext for CommandRecorder {
    type Backend = HostBackend;

    fn set_attribute_pointer(
        &mut self,
        attribute: VertexAttribute,
        layout: AttributeLayout,
        buffer: &HostBuffer<f32>,
    ) {
        self.commands.push(DrawCommand::AttributePointer {
            attribute,
            layout,
            buffer: buffer.clone(),
        });
    }

    fn enable_attribute(&mut self, attribute: VertexAttribute) {
        self.enabled |= attribute.bit();
        self.commands.push(DrawCommand::Enable(attribute));
    }

    fn disable_attribute(&mut self, attribute: VertexAttribute) {
        self.enabled &= !attribute.bit();
        self.commands.push(DrawCommand::Disable(attribute));
    }

    fn draw_indexed(&mut self, draw: IndexedDraw, indices: &HostBuffer<u16>) {
        let enabled = self.enabled_attributes();
        self.commands.push(DrawCommand::DrawIndexed {
            draw,
            indices: indices.clone(),
            enabled,
        });
    }
}
