//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, motion in units per frame
//! - Seeded RNG only (owned by `GameState`)
//! - Stable iteration order (fixed slot order in each population)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{ENEMY_HITBOX, Hitbox, PLATFORM_HITBOX, POWER_UP_HITBOX};
pub use entity::{Entity, EntityKind, Population};
pub use scroll::scroll_world;
pub use state::{GameEvent, GamePhase, GameState, Player, Session};
pub use tick::{TickInput, tick};
