//! Rendering handoff
//!
//! The core never draws. Each frame it builds a [`FrameSnapshot`] and passes
//! it to a [`FrameSink`], which owns sprites, fonts and text layout.

pub mod hud;
pub mod snapshot;

pub use hud::{LogFrameSink, hud_lines};
pub use snapshot::FrameSnapshot;

/// Receives one snapshot per frame
pub trait FrameSink {
    fn present(&mut self, snap: &FrameSnapshot);
}
