//! Core engine-facing contracts.
//!
//! What the window runtime hands to the program it drives: the `App`
//! callbacks and the per-frame context used to record and present a frame.

mod ctx;

pub use ctx::{App, AppControl, FrameCtx, WindowCtx};
