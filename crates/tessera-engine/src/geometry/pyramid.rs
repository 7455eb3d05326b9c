use crate::coords::Vec3;
use crate::paint::Color;

use super::Geometry;

/// Corner colors by vertex index: black, red, yellow, green, blue (apex).
///
/// Positional, not a material: every corner is distinguishable on screen.
pub const PYRAMID_PALETTE: [Color; 5] =
    [Color::BLACK, Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE];

/// Two base triangles, then one lateral triangle per base edge.
///
/// The sequence is fixed; renderers rely on its winding for face culling.
#[rustfmt::skip]
pub const PYRAMID_INDICES: [u16; 18] = [
    0, 1, 2,  0, 2, 3, // base
    0, 4, 1,  1, 4, 2, // lateral
    2, 4, 3,  3, 4, 0,
];

const DEFAULT_HEIGHT: f32 = 40.0;

/// Construction parameters of a square-based pyramid.
///
/// No field is validated. Zero height flattens the apex onto the base plane
/// and negative widths mirror the base across the center; both still produce
/// well-defined geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PyramidParams {
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub center_z: f32,
    pub base_width_x: f32,
    pub base_width_y: f32,
}

impl PyramidParams {
    /// Fully specified pyramid: base centered at `(x, y, z)`, `xw` by `yw`.
    #[inline]
    pub const fn new(height: f32, x: f32, y: f32, z: f32, xw: f32, yw: f32) -> Self {
        Self {
            height,
            center_x: x,
            center_y: y,
            center_z: z,
            base_width_x: xw,
            base_width_y: yw,
        }
    }

    /// Square base as wide as the pyramid is tall, centered at `(x, y, z)`.
    #[inline]
    pub const fn centered_at(height: f32, x: f32, y: f32, z: f32) -> Self {
        Self::new(height, x, y, z, height, height)
    }

    /// Square base as wide as the pyramid is tall, centered at the origin.
    #[inline]
    pub const fn with_height(height: f32) -> Self {
        Self::centered_at(height, 0.0, 0.0, 0.0)
    }

    /// Center of the base.
    #[inline]
    pub const fn center(&self) -> Vec3 {
        Vec3::new(self.center_x, self.center_y, self.center_z)
    }
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self::with_height(DEFAULT_HEIGHT)
    }
}

/// Vertex data of one pyramid.
///
/// Vertices 0..4 are the base corners (counter-clockwise seen from +Z,
/// starting at -X-Y), vertex 4 is the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct PyramidGeometry {
    pub positions: [Vec3; 5],
    pub colors: [Color; 5],
    pub indices: [u16; 18],
}

impl PyramidGeometry {
    pub const APEX: usize = 4;

    #[inline]
    pub fn apex(&self) -> Vec3 {
        self.positions[Self::APEX]
    }

    #[inline]
    pub fn base_corners(&self) -> &[Vec3] {
        &self.positions[..Self::APEX]
    }

    /// Triangles in submission order.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

impl Geometry for PyramidGeometry {
    #[inline]
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    fn indices(&self) -> &[u16] {
        &self.indices
    }
}

/// Builds the vertex, color and index arrays for `params`.
pub fn build_pyramid(params: &PyramidParams) -> PyramidGeometry {
    let PyramidParams {
        height,
        center_x: x,
        center_y: y,
        center_z: z,
        ..
    } = *params;
    let hx = params.base_width_x / 2.0;
    let hy = params.base_width_y / 2.0;

    let positions = [
        Vec3::new(x - hx, y - hy, z),
        Vec3::new(x + hx, y - hy, z),
        Vec3::new(x + hx, y + hy, z),
        Vec3::new(x - hx, y + hy, z),
        Vec3::new(x, y, z + height),
    ];

    PyramidGeometry {
        positions,
        colors: PYRAMID_PALETTE,
        indices: PYRAMID_INDICES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::debug_assert_aligned;

    fn v(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    fn sample_params() -> Vec<PyramidParams> {
        vec![
            PyramidParams::default(),
            PyramidParams::new(1.0, 3.0, -2.0, 7.5, 2.0, 8.0),
            PyramidParams::new(-12.5, 0.25, 0.5, -1.0, 3.0, 3.0),
            PyramidParams::new(0.0, 1.0, 1.0, 1.0, 0.0, 0.0),
            PyramidParams::new(1e6, -1e6, 1e-3, 0.0, -5.0, 9.0),
        ]
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn default_is_forty_unit_pyramid_at_origin() {
        assert_eq!(PyramidParams::default(), PyramidParams::new(40.0, 0.0, 0.0, 0.0, 40.0, 40.0));
    }

    #[test]
    fn centered_at_uses_height_for_base() {
        let p = PyramidParams::centered_at(6.0, 1.0, 2.0, 3.0);
        assert_eq!(p, PyramidParams::new(6.0, 1.0, 2.0, 3.0, 6.0, 6.0));
        assert_eq!(p.center(), v(1.0, 2.0, 3.0));
    }

    #[test]
    fn with_height_is_centered_at_origin() {
        assert_eq!(PyramidParams::with_height(2.0), PyramidParams::centered_at(2.0, 0.0, 0.0, 0.0));
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn reference_pyramid_vertices() {
        let g = build_pyramid(&PyramidParams::new(40.0, 0.0, 0.0, 0.0, 40.0, 40.0));
        assert_eq!(
            g.positions,
            [
                v(-20.0, -20.0, 0.0),
                v(20.0, -20.0, 0.0),
                v(20.0, 20.0, 0.0),
                v(-20.0, 20.0, 0.0),
                v(0.0, 0.0, 40.0),
            ]
        );
        assert_eq!(g.indices, [0, 1, 2, 0, 2, 3, 0, 4, 1, 1, 4, 2, 2, 4, 3, 3, 4, 0]);
    }

    #[test]
    fn offset_center_and_uneven_base() {
        let g = build_pyramid(&PyramidParams::new(1.0, 3.0, -2.0, 7.5, 2.0, 8.0));
        assert_eq!(g.base_corners(), &[
            v(2.0, -6.0, 7.5),
            v(4.0, -6.0, 7.5),
            v(4.0, 2.0, 7.5),
            v(2.0, 2.0, 7.5),
        ]);
        assert_eq!(g.apex(), v(3.0, -2.0, 8.5));
    }

    #[test]
    fn apex_sits_height_above_base() {
        for p in sample_params() {
            let g = build_pyramid(&p);
            assert_eq!(g.positions.len(), 5);
            for corner in g.base_corners() {
                let dz = g.apex().z - corner.z;
                assert!((dz - p.height).abs() <= p.height.abs() * 1e-6 + 1e-6, "{p:?}");
            }
        }
    }

    #[test]
    fn palette_and_indices_do_not_depend_on_params() {
        for p in sample_params() {
            let g = build_pyramid(&p);
            assert_eq!(g.colors, [Color::BLACK, Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE]);
            assert_eq!(g.indices, PYRAMID_INDICES);
            assert!(g.indices.iter().all(|&i| i < 5));
            debug_assert_aligned(&g);
        }
    }

    #[test]
    fn triangles_follow_index_table() {
        let g = build_pyramid(&PyramidParams::default());
        let tris: Vec<_> = g.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 4, 1], [1, 4, 2], [2, 4, 3], [3, 4, 0]]);
    }

    // ── degenerate parameters ─────────────────────────────────────────────

    #[test]
    fn zero_height_puts_apex_at_center() {
        let g = build_pyramid(&PyramidParams::new(0.0, 1.5, -2.0, 3.0, 4.0, 4.0));
        assert_eq!(g.apex(), v(1.5, -2.0, 3.0));
    }

    #[test]
    fn zero_base_collapses_corners_to_center() {
        let g = build_pyramid(&PyramidParams::new(5.0, 1.0, 2.0, 3.0, 0.0, 0.0));
        assert!(g.base_corners().iter().all(|&c| c == v(1.0, 2.0, 3.0)));
        assert_eq!(g.apex(), v(1.0, 2.0, 8.0));
    }

    #[test]
    fn negative_widths_mirror_base() {
        let pos = build_pyramid(&PyramidParams::new(1.0, 0.0, 0.0, 0.0, 2.0, 4.0));
        let neg = build_pyramid(&PyramidParams::new(1.0, 0.0, 0.0, 0.0, -2.0, -4.0));
        assert_eq!(neg.positions[0], pos.positions[2]);
        assert_eq!(neg.positions[1], pos.positions[3]);
        assert_eq!(neg.positions[2], pos.positions[0]);
        assert_eq!(neg.positions[3], pos.positions[1]);
        assert_eq!(neg.apex(), pos.apex());
    }

    #[test]
    fn negative_height_points_down() {
        let g = build_pyramid(&PyramidParams::new(-3.0, 0.0, 0.0, 1.0, 1.0, 1.0));
        assert_eq!(g.apex(), v(0.0, 0.0, -2.0));
    }
}
