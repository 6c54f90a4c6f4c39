//! Doodle Jump - a single-screen arcade platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, collisions, game state)
//! - `driver`: Fixed-rate frame loop wiring the simulation to its collaborators
//! - `platform`: Input / close-signal abstraction
//! - `audio`: Sound effect sink
//! - `renderer`: Per-frame render snapshot and HUD text
//! - `settings`: JSON configuration

pub mod audio;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frames per second of the fixed-rate loop
    pub const FRAME_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 533.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Horizontal step per held arrow key, per frame
    pub const PLAYER_STEP: f32 = 3.0;
    /// Screen y the player cannot rise above; further ascent scrolls the world
    pub const RESTING_ALTITUDE: f32 = 200.0;

    /// Gravity (units/frame²)
    pub const GRAVITY: f32 = 0.2;
    /// Velocity set on landing a platform (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Population sizes
    pub const PLATFORM_COUNT: usize = 10;
    pub const POWER_UP_COUNT: usize = 3;
    pub const ENEMY_COUNT: usize = 2;

    /// Horizontal speed magnitudes
    pub const PLATFORM_SPEED: f32 = 1.5;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Right-hand reversal bounds (screen width minus sprite width)
    pub const PLATFORM_X_BOUND: f32 = 332.0;
    pub const ENEMY_X_BOUND: f32 = 368.0;

    /// Score awarded per power-up pickup
    pub const POWER_UP_SCORE: u32 = 5;
    /// Where a collected power-up is parked until it scrolls off the bottom
    pub const POWER_UP_PARKED_Y: f32 = -50.0;
    /// Score needed per level
    pub const SCORE_PER_LEVEL: u32 = 10;
}

/// Level for a given score: one level per `SCORE_PER_LEVEL` points, starting at 1
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    score / consts::SCORE_PER_LEVEL + 1
}
