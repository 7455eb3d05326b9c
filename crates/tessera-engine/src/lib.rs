//! Tessera engine crate.
//!
//! Procedural shape primitives (geometry builders + draw contract), a
//! recording host backend for headless use, and a wgpu backend with the
//! window/device runtime the viewer runs on.

pub mod coords;
pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
