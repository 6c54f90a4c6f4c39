//! Fixed-rate frame loop
//!
//! Per frame: poll close -> read input -> tick -> play sounds -> present
//! snapshot -> wait for the next frame slot.

use std::time::{Duration, Instant};

use crate::audio::{AudioSink, SoundEffect};
use crate::platform::{Input, Key};
use crate::renderer::{FrameSink, FrameSnapshot};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Frame-rate limiter
pub trait FramePacer {
    /// Block until the next frame should start
    fn wait(&mut self);
}

/// Sleeps out whatever is left of each frame
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FixedRatePacer {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            frame_start: Instant::now(),
        }
    }
}

impl FramePacer for FixedRatePacer {
    fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if let Some(time_to_wait) = self.frame_duration.checked_sub(elapsed) {
            std::thread::sleep(time_to_wait);
        }
        self.frame_start = Instant::now();
    }
}

/// Runs frames back to back (tests, fast-forward)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl FramePacer for Unpaced {
    fn wait(&mut self) {}
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub games_over: u32,
    pub best_score: u32,
    pub final_score: u32,
    pub final_level: u32,
}

/// Owns the collaborators and drives the game one frame at a time
pub struct FrameDriver<I, A, F, P> {
    pub input: I,
    pub audio: A,
    pub frames: F,
    pub pacer: P,
    /// Let the autopilot steer
    pub idle_mode: bool,
    summary: RunSummary,
}

impl<I, A, F, P> FrameDriver<I, A, F, P>
where
    I: Input,
    A: AudioSink,
    F: FrameSink,
    P: FramePacer,
{
    pub fn new(input: I, audio: A, frames: F, pacer: P) -> Self {
        Self {
            input,
            audio,
            frames,
            pacer,
            idle_mode: false,
            summary: RunSummary::default(),
        }
    }

    pub fn with_idle_mode(mut self, idle_mode: bool) -> Self {
        self.idle_mode = idle_mode;
        self
    }

    /// Run one frame (everything after the close check)
    pub fn step(&mut self, state: &mut GameState) {
        let input = TickInput {
            left: self.input.is_key_held(Key::Left),
            right: self.input.is_key_held(Key::Right),
            restart: self.input.is_key_held(Key::Restart),
            idle_mode: self.idle_mode,
        };

        tick(state, &input);

        for event in &state.events {
            if *event == GameEvent::GameOver {
                self.summary.games_over += 1;
            }
            if let Some(effect) = SoundEffect::for_event(event) {
                self.audio.play(effect);
            }
        }

        self.summary.frames += 1;
        self.summary.best_score = self.summary.best_score.max(state.session.score);
        self.frames.present(&FrameSnapshot::capture(state));
    }

    /// Loop until the input raises the close signal
    pub fn run(&mut self, state: &mut GameState) -> RunSummary {
        log::info!("Frame loop starting");
        while !self.input.poll_close() {
            self.step(state);
            self.pacer.wait();
        }
        self.summary.final_score = state.session.score;
        self.summary.final_level = state.session.level;
        log::info!(
            "Frame loop stopped after {} frames ({} game overs, best score {})",
            self.summary.frames,
            self.summary.games_over,
            self.summary.best_score
        );
        self.summary
    }
}
