//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Close/quit signal
//! - Held-key input
//!
//! A windowed host implements [`Input`] over its event loop; [`HeadlessInput`]
//! replays a key schedule and is what the binary and tests use.

pub mod headless;

pub use headless::{HeadlessInput, KeySpan};

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Restart,
}

/// Input collaborator, polled once per frame
pub trait Input {
    /// Called at the start of every frame. Returns true when the loop should stop.
    fn poll_close(&mut self) -> bool;

    /// Whether `key` is held during the current frame
    fn is_key_held(&self, key: Key) -> bool;
}
