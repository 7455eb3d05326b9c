use crate::render::backend::{
    AttributeLayout, DrawContext, IndexFormat, IndexedDraw, Topology, VertexAttribute,
};
use crate::render::buffers::{COLOR_LAYOUT, POSITION_LAYOUT};

use super::buffer::{GpuBackend, GpuBuffer};

/// Draw context over one render pass of [`ShapePipeline`](super::ShapePipeline).
///
/// Attribute pointers bind vertex buffer slots. An indexed draw is issued only
/// while every attribute the pipeline reads is both bound and enabled;
/// otherwise it is dropped with a one-time warning.
pub struct GpuDrawContext<'p> {
    pass: wgpu::RenderPass<'p>,
    bound: u8,
    enabled: u8,
    warned: bool,
}

const REQUIRED: u8 = VertexAttribute::Position.bit() | VertexAttribute::Color.bit();

impl<'p> GpuDrawContext<'p> {
    pub(super) fn new(pass: wgpu::RenderPass<'p>) -> Self {
        Self {
            pass,
            bound: 0,
            enabled: 0,
            warned: false,
        }
    }

    fn warn_once(&mut self, msg: &str) {
        if !self.warned {
            log::warn!("GpuDrawContext: {msg}; draw skipped");
            self.warned = true;
        }
    }
}

/// Why an indexed draw cannot be issued with the given attribute state, if
/// it cannot.
fn skip_reason(bound: u8, enabled: u8, count: u32, index_len: u32) -> Option<&'static str> {
    if bound & enabled & REQUIRED != REQUIRED {
        return Some("position/color attributes not bound and enabled");
    }
    if count == 0 || count > index_len {
        return Some("index count out of range");
    }
    None
}

fn slot_of(attribute: VertexAttribute) -> (u32, AttributeLayout) {
    match attribute {
        VertexAttribute::Position => (0, POSITION_LAYOUT),
        VertexAttribute::Color => (1, COLOR_LAYOUT),
    }
}

impl DrawContext for GpuDrawContext<'_> {
    type Backend = GpuBackend;

    fn set_attribute_pointer(
        &mut self,
        attribute: VertexAttribute,
        layout: AttributeLayout,
        buffer: &GpuBuffer,
    ) {
        let (slot, expected) = slot_of(attribute);

        // Slot layouts are baked into the pipeline.
        if layout.effective_stride() != expected.effective_stride()
            || layout.components != expected.components
            || buffer.is_empty()
        {
            self.bound &= !attribute.bit();
            self.warn_once("attribute layout does not match the pipeline");
            return;
        }

        self.pass.set_vertex_buffer(slot, buffer.buffer().slice(..));
        self.bound |= attribute.bit();
    }

    fn enable_attribute(&mut self, attribute: VertexAttribute) {
        self.enabled |= attribute.bit();
    }

    fn disable_attribute(&mut self, attribute: VertexAttribute) {
        self.enabled &= !attribute.bit();
    }

    fn draw_indexed(&mut self, draw: IndexedDraw, indices: &GpuBuffer) {
        if let Some(reason) = skip_reason(self.bound, self.enabled, draw.count, indices.len()) {
            self.warn_once(reason);
            return;
        }

        // The pipeline is built for triangle lists only.
        debug_assert_eq!(draw.topology, Topology::TriangleList);
        let format = match draw.index_format {
            IndexFormat::U16 => wgpu::IndexFormat::Uint16,
        };

        self.pass.set_index_buffer(indices.buffer().slice(..), format);
        self.pass.draw_indexed(0..draw.count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS: u8 = VertexAttribute::Position.bit();
    const COL: u8 = VertexAttribute::Color.bit();

    #[test]
    fn draws_when_both_attributes_bound_and_enabled() {
        assert_eq!(skip_reason(POS | COL, POS | COL, 18, 18), None);
        assert_eq!(skip_reason(POS | COL, POS | COL, 3, 18), None);
    }

    #[test]
    fn skips_when_an_attribute_is_bound_but_disabled() {
        assert!(skip_reason(POS | COL, POS, 18, 18).is_some());
        assert!(skip_reason(POS | COL, COL, 18, 18).is_some());
        assert!(skip_reason(POS | COL, 0, 18, 18).is_some());
    }

    #[test]
    fn skips_when_an_attribute_is_enabled_but_unbound() {
        assert!(skip_reason(POS, POS | COL, 18, 18).is_some());
        assert!(skip_reason(COL, POS | COL, 18, 18).is_some());
    }

    #[test]
    fn bound_and_enabled_must_cover_the_same_attribute() {
        // Position only bound, color only enabled: neither is usable.
        assert!(skip_reason(POS, COL, 18, 18).is_some());
    }

    #[test]
    fn skips_empty_or_overlong_index_ranges() {
        assert!(skip_reason(POS | COL, POS | COL, 0, 18).is_some());
        assert!(skip_reason(POS | COL, POS | COL, 19, 18).is_some());
    }

    #[test]
    fn slots_follow_pipeline_layout() {
        assert_eq!(slot_of(VertexAttribute::Position), (0, POSITION_LAYOUT));
        assert_eq!(slot_of(VertexAttribute::Color), (1, COLOR_LAYOUT));
    }
}
