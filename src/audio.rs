//! Sound effect output
//!
//! The simulation only raises events; this module maps them to sound
//! effects and hands them to an [`AudioSink`]. Actual playback is the
//! host's business. [`LogAudio`] is the headless sink.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player bounced off a platform
    Jump,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::GameOver => "gameover",
        }
    }
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio sink that logs instead of playing, and counts what it was asked to play
#[derive(Debug, Clone)]
pub struct LogAudio {
    master_volume: f32,
    muted: bool,
    jumps: usize,
    game_overs: usize,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            jumps: 0,
            game_overs: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// How many times `effect` has been played
    pub fn count(&self, effect: SoundEffect) -> usize {
        match effect {
            SoundEffect::Jump => self.jumps,
            SoundEffect::GameOver => self.game_overs,
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("play {} (vol {:.2})", effect.as_str(), vol);
        match effect {
            SoundEffect::Jump => self.jumps += 1,
            SoundEffect::GameOver => self.game_overs += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mapping() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jump), Some(SoundEffect::Jump));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::GameOver),
            Some(SoundEffect::GameOver)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::PowerUpCollected), None);
        assert_eq!(SoundEffect::for_event(&GameEvent::LevelUp { level: 2 }), None);
    }

    #[test]
    fn test_counts_per_effect() {
        let mut audio = LogAudio::new();
        for _ in 0..1000 {
            audio.play(SoundEffect::Jump);
        }
        audio.play(SoundEffect::GameOver);
        assert_eq!(audio.count(SoundEffect::Jump), 1000);
        assert_eq!(audio.count(SoundEffect::GameOver), 1);
    }

    #[test]
    fn test_muted_sink_plays_nothing() {
        let mut audio = LogAudio::new();
        audio.play(SoundEffect::Jump);
        audio.set_muted(true);
        audio.play(SoundEffect::GameOver);
        assert_eq!(audio.count(SoundEffect::Jump), 1);
        assert_eq!(audio.count(SoundEffect::GameOver), 0);

        audio.set_muted(false);
        audio.set_master_volume(0.0);
        audio.play(SoundEffect::Jump);
        assert_eq!(audio.count(SoundEffect::Jump), 1);
    }
}
