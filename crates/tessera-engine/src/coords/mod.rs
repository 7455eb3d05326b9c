//! Coordinate types shared by geometry builders and renderers.
//!
//! Model space is right-handed with +Z up: shapes sit on the XY plane and
//! extend along +Z.

mod vec3;
mod viewport;

pub use vec3::{flatten_positions, Vec3};
pub use viewport::Viewport;
