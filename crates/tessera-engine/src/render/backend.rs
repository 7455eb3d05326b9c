//! Services a shape needs from the host renderer.
//!
//! The model is the fixed-function client-array pipeline: attribute pointers
//! into tightly packed float buffers, per-attribute enable flags, and indexed
//! draws. Backends map it onto whatever they actually drive.

/// Renderer-native buffer handle types of one backend.
pub trait Backend {
    /// Read-only float buffer (positions, colors).
    type FloatBuffer;
    /// Read-only index buffer.
    type IndexBuffer;
}

/// One-shot conversion of numeric sequences into renderer-native buffers.
pub trait BufferFactory {
    type Backend: Backend;

    fn make_float_buffer(&self, label: &str, data: &[f32])
        -> <Self::Backend as Backend>::FloatBuffer;

    fn make_index_buffer(&self, label: &str, data: &[u16])
        -> <Self::Backend as Backend>::IndexBuffer;
}

/// Drawing context state machine.
///
/// Object safe: shapes draw through `&mut dyn DrawContext<Backend = B>`.
/// Implementations decide what an inconsistent state (disabled attribute,
/// missing pointer) means; callers do not check.
pub trait DrawContext {
    type Backend: Backend;

    fn set_attribute_pointer(
        &mut self,
        attribute: VertexAttribute,
        layout: AttributeLayout,
        buffer: &<Self::Backend as Backend>::FloatBuffer,
    );

    fn enable_attribute(&mut self, attribute: VertexAttribute);

    fn disable_attribute(&mut self, attribute: VertexAttribute);

    fn draw_indexed(&mut self, draw: IndexedDraw, indices: &<Self::Backend as Backend>::IndexBuffer);
}

/// Per-vertex attribute arrays a shape can feed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexAttribute {
    Position,
    Color,
}

impl VertexAttribute {
    pub const ALL: [VertexAttribute; 2] = [VertexAttribute::Position, VertexAttribute::Color];

    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        match self {
            VertexAttribute::Position => 1 << 0,
            VertexAttribute::Color => 1 << 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScalarType {
    F32,
}

impl ScalarType {
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            ScalarType::F32 => 4,
        }
    }
}

/// How an attribute reads its float buffer.
///
/// `stride == 0` means tightly packed (`components * scalar size`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeLayout {
    pub components: u32,
    pub scalar: ScalarType,
    pub stride: u32,
}

impl AttributeLayout {
    #[inline]
    pub const fn packed_f32(components: u32) -> Self {
        Self { components, scalar: ScalarType::F32, stride: 0 }
    }

    /// Byte distance between consecutive elements.
    #[inline]
    pub const fn effective_stride(self) -> u32 {
        if self.stride == 0 {
            self.components * self.scalar.size()
        } else {
            self.stride
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    TriangleList,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IndexFormat {
    U16,
}

/// Arguments of one indexed draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IndexedDraw {
    pub topology: Topology,
    pub index_format: IndexFormat,
    pub count: u32,
}

impl IndexedDraw {
    #[inline]
    pub const fn triangles_u16(count: u32) -> Self {
        Self {
            topology: Topology::TriangleList,
            index_format: IndexFormat::U16,
            count,
        }
    }
}
