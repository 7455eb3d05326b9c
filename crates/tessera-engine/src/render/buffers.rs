use crate::coords::flatten_positions;
use crate::geometry::{debug_assert_aligned, Geometry};
use crate::paint::flatten_colors;

use super::backend::{
    AttributeLayout, Backend, BufferFactory, DrawContext, IndexedDraw, VertexAttribute,
};
use super::scope::AttributeScope;

/// Positions: three packed `f32` per vertex.
pub const POSITION_LAYOUT: AttributeLayout = AttributeLayout::packed_f32(3);

/// Colors: four packed `f32` per vertex.
pub const COLOR_LAYOUT: AttributeLayout = AttributeLayout::packed_f32(4);

// Enable order; released in reverse.
const CLIENT_ARRAYS: [VertexAttribute; 2] = [VertexAttribute::Color, VertexAttribute::Position];

/// Renderer-native vertex, color and index buffers of one shape.
///
/// Materialized once from a [`Geometry`]; immutable afterwards. Every
/// [`draw`](Self::draw) resubmits the same buffers.
pub struct ShapeBuffers<B: Backend> {
    vertices: B::FloatBuffer,
    colors: B::FloatBuffer,
    indices: B::IndexBuffer,
    index_count: u32,
}

impl<B: Backend> ShapeBuffers<B> {
    /// Flattens `geometry` and converts each array into a backend buffer.
    pub fn upload<F, G>(factory: &F, label: &str, geometry: &G) -> Self
    where
        F: BufferFactory<Backend = B> + ?Sized,
        G: Geometry + ?Sized,
    {
        debug_assert_aligned(geometry);

        let vertices =
            factory.make_float_buffer(&format!("{label} vertices"), flatten_positions(geometry.positions()));
        let colors =
            factory.make_float_buffer(&format!("{label} colors"), flatten_colors(geometry.colors()));
        let indices = factory.make_index_buffer(&format!("{label} indices"), geometry.indices());

        Self {
            vertices,
            colors,
            indices,
            index_count: geometry.indices().len() as u32,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &B::FloatBuffer {
        &self.vertices
    }

    #[inline]
    pub fn colors(&self) -> &B::FloatBuffer {
        &self.colors
    }

    #[inline]
    pub fn indices(&self) -> &B::IndexBuffer {
        &self.indices
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds both attribute arrays, enables them for one indexed triangle-list
    /// draw with `u16` indices, then disables them again.
    pub fn draw(&self, ctx: &mut dyn DrawContext<Backend = B>) {
        ctx.set_attribute_pointer(VertexAttribute::Color, COLOR_LAYOUT, &self.colors);
        ctx.set_attribute_pointer(VertexAttribute::Position, POSITION_LAYOUT, &self.vertices);

        let mut scope = AttributeScope::enable(ctx, &CLIENT_ARRAYS);
        scope.draw_indexed(IndexedDraw::triangles_u16(self.index_count), &self.indices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::paint::Color;
    use crate::render::host::{CommandRecorder, DrawCommand, HostBackend, HostBufferFactory};

    struct Triangle;

    impl Geometry for Triangle {
        fn positions(&self) -> &[Vec3] {
            const P: [Vec3; 3] =
                [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
            &P
        }

        fn colors(&self) -> &[Color] {
            const C: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];
            &C
        }

        fn indices(&self) -> &[u16] {
            &[0, 1, 2]
        }
    }

    #[test]
    fn upload_flattens_each_array() {
        let factory = HostBufferFactory::new();
        let buffers: ShapeBuffers<HostBackend> = ShapeBuffers::upload(&factory, "tri", &Triangle);

        assert_eq!(factory.buffers_created(), 3);
        assert_eq!(buffers.vertices().len(), 9);
        assert_eq!(buffers.colors().len(), 12);
        assert_eq!(&buffers.colors()[8..], &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(buffers.indices().as_slice(), &[0, 1, 2]);
        assert_eq!(buffers.index_count(), 3);
    }

    #[test]
    fn draw_sequence() {
        let factory = HostBufferFactory::new();
        let buffers: ShapeBuffers<HostBackend> = ShapeBuffers::upload(&factory, "tri", &Triangle);
        let mut rec = CommandRecorder::new();
        buffers.draw(&mut rec);

        let cmds = rec.commands();
        assert_eq!(cmds.len(), 7);
        assert!(matches!(
            &cmds[0],
            DrawCommand::AttributePointer { attribute: VertexAttribute::Color, layout, .. } if *layout == COLOR_LAYOUT
        ));
        assert!(matches!(
            &cmds[1],
            DrawCommand::AttributePointer { attribute: VertexAttribute::Position, layout, .. } if *layout == POSITION_LAYOUT
        ));
        assert_eq!(cmds[2], DrawCommand::Enable(VertexAttribute::Color));
        assert_eq!(cmds[3], DrawCommand::Enable(VertexAttribute::Position));
        assert!(matches!(
            &cmds[4],
            DrawCommand::DrawIndexed { draw, enabled, .. }
                if *draw == IndexedDraw::triangles_u16(3) && enabled.len() == 2
        ));
        assert_eq!(cmds[5], DrawCommand::Disable(VertexAttribute::Position));
        assert_eq!(cmds[6], DrawCommand::Disable(VertexAttribute::Color));
        assert!(rec.enabled_attributes().is_empty());
    }
}
