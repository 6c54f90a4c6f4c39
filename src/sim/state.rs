//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives in [`GameState`]; there is
//! no ambient global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Population};
use crate::consts::*;
use crate::level_for_score;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Something that happened during a tick, for audio and logging collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player bounced off a platform
    Jump,
    /// Playing -> GameOver transition
    GameOver,
    /// A power-up was picked up
    PowerUpCollected,
    /// A platform scrolled off the bottom and came back at the top
    PlatformRecycled,
    /// Score crossed into a new level
    LevelUp { level: u32 },
    /// GameOver -> Playing transition
    Restarted,
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vy: 0.0,
        }
    }
}

impl Player {
    /// Apply held arrow keys. Both may be held at once and cancel out.
    pub fn steer(&mut self, left: bool, right: bool) {
        if right {
            self.pos.x += PLAYER_STEP;
        }
        if left {
            self.pos.x -= PLAYER_STEP;
        }
    }

    /// One frame of constant gravity
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.pos.y += self.vy;
    }

    /// Fell below the visible screen
    #[inline]
    pub fn has_fallen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }

    pub fn bounce(&mut self) {
        self.vy = JUMP_VELOCITY;
    }
}

/// Score, level and lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    /// Cached `score / 10 + 1`, refreshed every playing frame
    pub level: u32,
    pub phase: GamePhase,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
        }
    }
}

impl Session {
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Recompute level from score. Returns the new level if it went up.
    pub fn refresh_level(&mut self) -> Option<u32> {
        let level = level_for_score(self.score);
        let previous = std::mem::replace(&mut self.level, level);
        (level > previous).then_some(level)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Injected random source; every spawn and recycle draws from it
    pub rng: Pcg32,
    /// Playing frames simulated so far
    pub frame: u64,
    pub player: Player,
    pub session: Session,
    pub platforms: Population<PLATFORM_COUNT>,
    pub power_ups: Population<POWER_UP_COUNT>,
    pub enemies: Population<ENEMY_COUNT>,
    /// Events raised by the most recent tick (cleared at the start of each tick)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    /// Create a new game state drawing from the given generator
    pub fn with_rng(mut rng: Pcg32) -> Self {
        let platforms = Population::spawn(EntityKind::Platform, &mut rng);
        let power_ups = Population::spawn(EntityKind::PowerUp, &mut rng);
        let enemies = Population::spawn(EntityKind::Enemy, &mut rng);
        Self {
            rng,
            frame: 0,
            player: Player::default(),
            session: Session::default(),
            platforms,
            power_ups,
            enemies,
            events: Vec::with_capacity(8),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Playing -> GameOver. Only the first call per run raises the event.
    pub fn end_game(&mut self, cause: &str) {
        if !self.session.is_playing() {
            return;
        }
        self.session.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!(
            "Game over ({}): score {}, level {}",
            cause,
            self.session.score,
            self.session.level
        );
    }

    /// GameOver -> Playing.
    ///
    /// Resets the player, score and level and re-rolls every platform.
    /// Power-ups and enemies keep whatever state they had when the run ended.
    pub fn restart(&mut self) {
        if self.session.is_playing() {
            return;
        }
        self.player = Player::default();
        self.session = Session::default();
        self.platforms.respawn(&mut self.rng);
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.level, 1);
        assert_eq!(state.player.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.platforms.len(), 10);
        assert_eq!(state.power_ups.len(), 3);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_same_seed_same_world() {
        assert_eq!(GameState::new(99), GameState::new(99));
        assert_ne!(GameState::new(1).platforms, GameState::new(2).platforms);
    }

    #[test]
    fn test_end_game_fires_once() {
        let mut state = GameState::new(5);
        state.end_game("test");
        state.end_game("test");
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(
            state.events.iter().filter(|e| **e == GameEvent::GameOver).count(),
            1
        );
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(5);
        state.session.score = 7;
        let before = state.clone();
        state.restart();
        assert_eq!(state, before);
    }

    #[test]
    fn test_refresh_level_reports_level_up() {
        let mut session = Session::default();
        session.score = 9;
        assert_eq!(session.refresh_level(), None);
        session.score = 10;
        assert_eq!(session.refresh_level(), Some(2));
        assert_eq!(session.refresh_level(), None);
        assert_eq!(session.level, 2);
    }

    #[test]
    fn test_player_steer_cancels() {
        let mut player = Player::default();
        player.steer(true, true);
        assert_eq!(player.pos.x, PLAYER_START_X);
        player.steer(false, true);
        assert_eq!(player.pos.x, PLAYER_START_X + 3.0);
        player.steer(true, false);
        assert_eq!(player.pos.x, PLAYER_START_X);
    }
}
