//! Shape primitives.

pub mod pyramid;

pub use pyramid::Pyramid;
