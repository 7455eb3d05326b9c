use crate::geometry::{build_pyramid, PyramidGeometry, PyramidParams};
use crate::render::backend::{Backend, BufferFactory, DrawContext};
use crate::render::buffers::ShapeBuffers;
use crate::render::Drawable;

/// Square-based pyramid with one fixed color per corner.
///
/// Geometry and buffers are produced once in [`Pyramid::new`] and never change;
/// build a new instance for different parameters.
pub struct Pyramid<B: Backend> {
    params: PyramidParams,
    geometry: PyramidGeometry,
    buffers: ShapeBuffers<B>,
}

impl<B: Backend> Pyramid<B> {
    pub fn new<F>(factory: &F, params: PyramidParams) -> Self
    where
        F: BufferFactory<Backend = B> + ?Sized,
    {
        let geometry = build_pyramid(&params);
        let buffers = ShapeBuffers::upload(factory, "tessera pyramid", &geometry);

        log::debug!(
            "pyramid: height={} center=({}, {}, {}) base={}x{}",
            params.height,
            params.center_x,
            params.center_y,
            params.center_z,
            params.base_width_x,
            params.base_width_y,
        );

        Self { params, geometry, buffers }
    }

    #[inline]
    pub fn params(&self) -> &PyramidParams {
        &self.params
    }

    #[inline]
    pub fn geometry(&self) -> &PyramidGeometry {
        &self.geometry
    }

    #[inline]
    pub fn buffers(&self) -> &ShapeBuffers<B> {
        &self.buffers
    }
}

impl<B: Backend> Drawable<B> for Pyramid<B> {
    fn draw(&self, ctx: &mut dyn DrawContext<Backend = B>) {
        self.buffers.draw(ctx);
    }
}
