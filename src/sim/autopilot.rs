//! Idle/demo mode steering
//!
//! Picks the closest platform under the player's feet and holds left or
//! right until the landing window is centred on it. Enemies are ignored.

use super::collision::Hitbox;
use super::state::GameState;
use crate::consts::PLAYER_STEP;

/// Held keys chosen by the autopilot for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

pub fn steer(state: &GameState) -> Steering {
    let player = &state.player;
    let hitbox = Hitbox::for_kind(state.platforms.kind);
    let feet = player.pos.y + hitbox.feet;

    let below = state
        .platforms
        .iter()
        .filter(|p| p.pos.y >= feet)
        .min_by(|a, b| {
            (a.pos.y - feet)
                .partial_cmp(&(b.pos.y - feet))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    // Nothing below: head for whichever platform is horizontally closest
    let target = below.or_else(|| {
        state.platforms.iter().min_by(|a, b| {
            (a.pos.x - player.pos.x)
                .abs()
                .partial_cmp(&(b.pos.x - player.pos.x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    let Some(target) = target else {
        return Steering::default();
    };

    // Lead a moving platform by one frame
    let mut target_x = target.pos.x;
    if target.oscillates {
        target_x += target.speed;
    }
    let dx = hitbox.centred_player_x(target_x) - player.pos.x;

    Steering {
        left: dx < -PLAYER_STEP / 2.0,
        right: dx > PLAYER_STEP / 2.0,
    }
}
