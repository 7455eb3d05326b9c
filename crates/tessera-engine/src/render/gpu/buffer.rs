use wgpu::util::DeviceExt;

use crate::render::backend::{Backend, BufferFactory};
use crate::render::RenderCtx;

/// Immutable GPU buffer plus the number of elements it was built from.
#[derive(Debug)]
pub struct GpuBuffer {
    buffer: wgpu::Buffer,
    len: u32,
}

impl GpuBuffer {
    fn init<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage,
        });
        Self { buffer, len: data.len() as u32 }
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Element count (floats or indices), not bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GpuBackend;

impl Backend for GpuBackend {
    type FloatBuffer = GpuBuffer;
    type IndexBuffer = GpuBuffer;
}

impl BufferFactory for RenderCtx<'_> {
    type Backend = GpuBackend;

    fn make_float_buffer(&self, label: &str, data: &[f32]) -> GpuBuffer {
        GpuBuffer::init(self.device, label, data, wgpu::BufferUsages::VERTEX)
    }

    fn make_index_buffer(&self, label: &str, data: &[u16]) -> GpuBuffer {
        GpuBuffer::init(self.device, label, data, wgpu::BufferUsages::INDEX)
    }
}
