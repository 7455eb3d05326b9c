//! Color model shared between geometry builders and renderers.
//!
//! Positions live in `coords`.

pub mod color;

pub use color::{flatten_colors, Color};
