//! HUD text and the headless frame sink

use super::FrameSink;
use super::snapshot::FrameSnapshot;

/// Text overlay for a frame, top to bottom
pub fn hud_lines(snap: &FrameSnapshot) -> Vec<String> {
    if snap.is_game_over() {
        vec!["GAME OVER".to_string(), "Press R to Restart".to_string()]
    } else {
        vec![format!("Score: {}", snap.score), format!("Level: {}", snap.level)]
    }
}

/// Frame sink that logs the HUD every `interval` frames and on phase changes
#[derive(Debug, Clone)]
pub struct LogFrameSink {
    interval: u64,
    presented: u64,
    last: Option<FrameSnapshot>,
}

impl LogFrameSink {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            presented: 0,
            last: None,
        }
    }

    /// Most recently presented frame
    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.last.as_ref()
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl FrameSink for LogFrameSink {
    fn present(&mut self, snap: &FrameSnapshot) {
        let phase_changed = self.last.is_some_and(|last| last.phase != snap.phase);
        if phase_changed || self.presented % self.interval == 0 {
            log::info!(
                "[frame {}] {} | player ({:.0}, {:.0})",
                snap.frame,
                hud_lines(snap).join(" | "),
                snap.player.x,
                snap.player.y
            );
        }
        log::trace!("{}", serde_json::to_string(snap).unwrap_or_default());
        self.presented += 1;
        self.last = Some(*snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};

    #[test]
    fn test_hud_lines() {
        let mut state = GameState::new(1);
        state.session.score = 12;
        state.session.level = 2;
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(hud_lines(&snap), vec!["Score: 12", "Level: 2"]);

        state.session.phase = GamePhase::GameOver;
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(hud_lines(&snap), vec!["GAME OVER", "Press R to Restart"]);
    }

    #[test]
    fn test_log_sink_keeps_last() {
        let mut sink = LogFrameSink::new(0);
        assert!(sink.last().is_none());
        let snap = FrameSnapshot::capture(&GameState::new(2));
        sink.present(&snap);
        sink.present(&snap);
        assert_eq!(sink.presented(), 2);
        assert_eq!(sink.last(), Some(&snap));
    }
}
