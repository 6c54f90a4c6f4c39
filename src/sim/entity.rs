//! Entity populations: platforms, power-ups and enemies
//!
//! Each population is a fixed-capacity array. Entities are never created or
//! destroyed during play; when one scrolls past the bottom of the screen it
//! is recycled in place with fresh random placement.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which population an entity belongs to (decides spawn, recycle and movement policy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Platform,
    PowerUp,
    Enemy,
}

impl EntityKind {
    /// Right-hand x bound at which horizontal motion reverses
    pub fn x_bound(self) -> f32 {
        match self {
            EntityKind::Platform => PLATFORM_X_BOUND,
            EntityKind::Enemy => ENEMY_X_BOUND,
            EntityKind::PowerUp => SCREEN_WIDTH,
        }
    }

    /// Fresh entity at a random on-screen position
    pub fn spawn<R: Rng>(self, rng: &mut R) -> Entity {
        let x = random_x(rng);
        let y = random_y(rng);
        match self {
            EntityKind::Platform => Entity {
                pos: Vec2::new(x, y),
                oscillates: rng.random_bool(0.5),
                speed: random_sign(rng) * PLATFORM_SPEED,
            },
            EntityKind::PowerUp => Entity {
                pos: Vec2::new(x, y),
                oscillates: false,
                speed: 0.0,
            },
            EntityKind::Enemy => Entity {
                pos: Vec2::new(x, y),
                oscillates: false,
                speed: random_sign(rng) * ENEMY_SPEED,
            },
        }
    }
}

/// A moving actor. `pos` is the top-left corner of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    /// Horizontal drift flag (platforms only; enemies always move, power-ups never)
    pub oscillates: bool,
    /// Signed horizontal speed, flipped at the x bounds
    pub speed: f32,
}

impl Entity {
    /// Whether this entity drifts sideways this frame
    pub fn moves(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Platform => self.oscillates,
            EntityKind::Enemy => true,
            EntityKind::PowerUp => false,
        }
    }

    /// Advance horizontal drift by one frame.
    ///
    /// The speed reverses once x has left `[0, bound]`, but x itself is not
    /// clamped, so an entity overshoots the bound by up to one step.
    pub fn oscillate(&mut self, kind: EntityKind) {
        if !self.moves(kind) {
            return;
        }
        self.pos.x += self.speed;
        if self.pos.x < 0.0 || self.pos.x > kind.x_bound() {
            self.speed = -self.speed;
        }
    }

    /// Below the bottom edge of the screen
    #[inline]
    pub fn is_below_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }

    /// Re-place an entity that scrolled off the bottom. Returns true if it was recycled.
    pub fn recycle<R: Rng>(&mut self, kind: EntityKind, rng: &mut R) -> bool {
        if !self.is_below_screen() {
            return false;
        }
        match kind {
            EntityKind::Platform => {
                // Platforms re-enter at the very top
                self.pos.y = 0.0;
                self.pos.x = random_x(rng);
                self.oscillates = rng.random_bool(0.5);
                self.speed = random_sign(rng) * PLATFORM_SPEED;
            }
            EntityKind::PowerUp | EntityKind::Enemy => {
                // Anywhere on screen; enemies keep their speed
                self.pos.y = random_y(rng);
                self.pos.x = random_x(rng);
            }
        }
        true
    }
}

/// Fixed-capacity population of one entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "[Entity; N]: Serialize",
    deserialize = "[Entity; N]: Deserialize<'de>"
))]
pub struct Population<const N: usize> {
    pub kind: EntityKind,
    pub slots: [Entity; N],
}

impl<const N: usize> Population<N> {
    pub fn spawn<R: Rng>(kind: EntityKind, rng: &mut R) -> Self {
        Self {
            kind,
            slots: std::array::from_fn(|_| kind.spawn(rng)),
        }
    }

    /// Re-randomize every slot as at spawn time
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        let kind = self.kind;
        for slot in &mut self.slots {
            *slot = kind.spawn(rng);
        }
    }

    /// Shift every entity by the world scroll (subtracts the player's vertical velocity)
    pub fn apply_scroll(&mut self, vy: f32) {
        for slot in &mut self.slots {
            slot.pos.y -= vy;
        }
    }

    /// Recycle every entity below the screen, returning how many were recycled
    pub fn recycle<R: Rng>(&mut self, rng: &mut R) -> u32 {
        let kind = self.kind;
        let mut recycled = 0;
        for slot in &mut self.slots {
            if slot.recycle(kind, rng) {
                recycled += 1;
            }
        }
        if recycled > 0 {
            log::debug!("Recycled {} {:?} entities", recycled, kind);
        }
        recycled
    }

    pub fn positions(&self) -> [Vec2; N] {
        std::array::from_fn(|i| self.slots[i].pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter()
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

#[inline]
fn random_x<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0..SCREEN_WIDTH as u32) as f32
}

#[inline]
fn random_y<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0..SCREEN_HEIGHT as u32) as f32
}

#[inline]
fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
