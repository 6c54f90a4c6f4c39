//! Fixed-rate simulation tick
//!
//! One call advances the game by exactly one frame. All motion is in
//! units per frame; there is no variable timestep.

use super::autopilot;
use super::collision::{collect_power_up, enemy_hit, platform_bounce};
use super::scroll::scroll_world;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::POWER_UP_SCORE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Restart key held (only read during GameOver)
    pub restart: bool,
    /// Idle/demo mode - autopilot steers instead of left/right
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Game over: only a restart changes anything. The restart frame itself
    // does not simulate.
    if state.session.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    let mut input = *input;
    if input.idle_mode {
        let steering = autopilot::steer(state);
        input.left = steering.left;
        input.right = steering.right;
    }

    state.frame += 1;

    // --- PLAYER ---
    state.player.steer(input.left, input.right);
    state.player.integrate();

    if state.player.has_fallen() {
        state.end_game("fell");
        return;
    }

    // --- WORLD SCROLL ---
    scroll_world(state);

    // --- RECYCLE ---
    let recycled = state.platforms.recycle(&mut state.rng);
    state.power_ups.recycle(&mut state.rng);
    state.enemies.recycle(&mut state.rng);
    state.session.score += recycled;
    for _ in 0..recycled {
        state.events.push(GameEvent::PlatformRecycled);
    }

    // --- COLLISIONS ---
    // Platforms: land first, then drift
    let platform_kind = state.platforms.kind;
    for platform in &mut state.platforms.slots {
        if platform_bounce(&mut state.player, platform) {
            state.events.push(GameEvent::Jump);
        }
        platform.oscillate(platform_kind);
    }

    for power_up in &mut state.power_ups.slots {
        if collect_power_up(&state.player, power_up) {
            state.session.score += POWER_UP_SCORE;
            state.events.push(GameEvent::PowerUpCollected);
            log::debug!("Power-up collected, score {}", state.session.score);
        }
    }

    // Enemies: drift first, then test contact
    let enemy_kind = state.enemies.kind;
    let mut hit = false;
    for enemy in &mut state.enemies.slots {
        enemy.oscillate(enemy_kind);
        hit |= enemy_hit(&state.player, enemy);
    }
    if hit {
        state.end_game("enemy");
        return;
    }

    // --- LEVEL ---
    if let Some(level) = state.session.refresh_level() {
        state.events.push(GameEvent::LevelUp { level });
        log::info!("Level {} (score {})", level, state.session.score);
    }
}
