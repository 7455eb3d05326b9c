//! Procedural geometry builders.
//!
//! Builders are pure: parameters in, index-aligned position/color/index
//! arrays out. Nothing here touches a rendering backend.

mod pyramid;

pub use pyramid::{build_pyramid, PyramidGeometry, PyramidParams, PYRAMID_INDICES, PYRAMID_PALETTE};

use crate::coords::Vec3;
use crate::paint::Color;

/// Index-aligned vertex data of one shape.
///
/// `positions()[i]` and `colors()[i]` describe the same corner; `indices()` is
/// a triangle list into those arrays.
pub trait Geometry {
    fn positions(&self) -> &[Vec3];
    fn colors(&self) -> &[Color];
    fn indices(&self) -> &[u16];
}

/// Checks the layout invariants every builder upholds. Debug builds only.
pub fn debug_assert_aligned<G: Geometry + ?Sized>(geometry: &G) {
    debug_assert_eq!(
        geometry.positions().len(),
        geometry.colors().len(),
        "position and color arrays must be index-aligned"
    );
    debug_assert_eq!(geometry.indices().len() % 3, 0, "index list is not a triangle list");
    debug_assert!(
        geometry
            .indices()
            .iter()
            .all(|&i| (i as usize) < geometry.positions().len()),
        "index out of range"
    );
}
