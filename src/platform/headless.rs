//! Scripted input for running without a window

use super::{Input, Key};

/// A key held for the frames `from..to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpan {
    pub key: Key,
    pub from: u64,
    pub to: u64,
}

impl KeySpan {
    pub fn new(key: Key, from: u64, to: u64) -> Self {
        Self { key, from, to }
    }

    fn covers(&self, frame: u64) -> bool {
        (self.from..self.to).contains(&frame)
    }
}

/// Input source that replays a fixed schedule.
///
/// Frames are counted from 0; `poll_close` advances to the next frame and
/// raises the close signal once `max_frames` frames have run.
#[derive(Debug, Clone, Default)]
pub struct HeadlessInput {
    script: Vec<KeySpan>,
    max_frames: Option<u64>,
    /// Hold Restart on every frame (the game ignores it while playing)
    auto_restart: bool,
    /// Frame about to run, `None` before the first poll
    frame: Option<u64>,
}

impl HeadlessInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(mut self, script: Vec<KeySpan>) -> Self {
        self.script = script;
        self
    }

    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    /// Current frame index (0 before the first poll)
    pub fn frame(&self) -> u64 {
        self.frame.unwrap_or(0)
    }
}

impl Input for HeadlessInput {
    fn poll_close(&mut self) -> bool {
        let next = self.frame.map_or(0, |f| f + 1);
        self.frame = Some(next);
        self.max_frames.is_some_and(|max| next >= max)
    }

    fn is_key_held(&self, key: Key) -> bool {
        if key == Key::Restart && self.auto_restart {
            return true;
        }
        let frame = self.frame();
        self.script.iter().any(|span| span.key == key && span.covers(frame))
    }
}
