//! Immutable per-frame view of the game for the drawing layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ENEMY_COUNT, PLATFORM_COUNT, POWER_UP_COUNT};
use crate::sim::{GamePhase, GameState};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub player: Vec2,
    pub platforms: [Vec2; PLATFORM_COUNT],
    pub power_ups: [Vec2; POWER_UP_COUNT],
    pub enemies: [Vec2; ENEMY_COUNT],
    pub score: u32,
    pub level: u32,
    pub phase: GamePhase,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            frame: state.frame,
            player: state.player.pos,
            platforms: state.platforms.positions(),
            power_ups: state.power_ups.positions(),
            enemies: state.enemies.positions(),
            score: state.session.score,
            level: state.session.level,
            phase: state.session.phase,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_copies_state() {
        let state = GameState::new(21);
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.player, state.player.pos);
        assert_eq!(snap.platforms[4], state.platforms.slots[4].pos);
        assert_eq!(snap.enemies[1], state.enemies.slots[1].pos);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
        assert!(!snap.is_game_over());
    }

    #[test]
    fn test_snapshot_json() {
        let snap = FrameSnapshot::capture(&GameState::new(3));
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}
