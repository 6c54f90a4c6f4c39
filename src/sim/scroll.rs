//! World scroll
//!
//! The player sprite never rises above the resting altitude. Any upward
//! motion past it is applied to the world instead: every entity moves down
//! by the distance the player would have risen.

use super::state::{GameState, Player};
use crate::consts::RESTING_ALTITUDE;

/// Clamp the player to the resting altitude.
///
/// Returns the vertical velocity to subtract from every entity, or `None`
/// when the player is at or below the resting altitude.
pub fn world_shift(player: &mut Player) -> Option<f32> {
    if player.pos.y < RESTING_ALTITUDE {
        player.pos.y = RESTING_ALTITUDE;
        Some(player.vy)
    } else {
        None
    }
}

/// Apply the world shift to all three populations with the same velocity
pub fn scroll_world(state: &mut GameState) -> Option<f32> {
    let vy = world_shift(&mut state.player)?;
    state.platforms.apply_scroll(vy);
    state.power_ups.apply_scroll(vy);
    state.enemies.apply_scroll(vy);
    Some(vy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_no_scroll_below_resting_altitude() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(100.0, 300.0);
        state.player.vy = -4.0;
        let before = state.platforms.clone();
        assert_eq!(scroll_world(&mut state), None);
        assert_eq!(state.player.pos.y, 300.0);
        assert_eq!(state.platforms, before);
    }

    #[test]
    fn test_scroll_uses_pre_clamp_velocity() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(100.0, 190.0);
        state.player.vy = -6.0;
        let platforms = state.platforms.positions();
        let power_ups = state.power_ups.positions();
        let enemies = state.enemies.positions();

        assert_eq!(scroll_world(&mut state), Some(-6.0));
        assert_eq!(state.player.pos.y, RESTING_ALTITUDE);

        // Shifted by the velocity (6), not by the clamp distance (10)
        for (after, before) in state.platforms.positions().iter().zip(platforms) {
            assert_eq!(after.y, before.y + 6.0);
        }
        for (after, before) in state.power_ups.positions().iter().zip(power_ups) {
            assert_eq!(after.y, before.y + 6.0);
        }
        for (after, before) in state.enemies.positions().iter().zip(enemies) {
            assert_eq!(after.y, before.y + 6.0);
        }
    }
}
