//! Doodle Jump entry point
//!
//! Runs the game headless: scripted/autopilot input, logged audio and HUD.
//! Usage: `doodle-jump [settings.json]`

use anyhow::Context;

use doodle_jump::Settings;
use doodle_jump::audio::LogAudio;
use doodle_jump::driver::{FixedRatePacer, FrameDriver};
use doodle_jump::platform::HeadlessInput;
use doodle_jump::renderer::LogFrameSink;
use doodle_jump::sim::GameState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).with_context(|| format!("loading {path}"))?,
        None => Settings::default(),
    };

    let seed = settings.resolve_seed();
    log::info!("Doodle Jump (headless) starting, seed {}", seed);

    let mut state = GameState::new(seed);

    let input = HeadlessInput::new()
        .with_max_frames(settings.max_frames)
        .with_auto_restart(settings.auto_restart);
    let mut audio = LogAudio::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_muted(settings.muted);
    let frames = LogFrameSink::new(settings.hud_log_interval);
    let pacer = FixedRatePacer::new(settings.frame_duration());

    let mut driver =
        FrameDriver::new(input, audio, frames, pacer).with_idle_mode(settings.autopilot);
    let summary = driver.run(&mut state);

    log::info!(
        "Final score {} (level {}), best {}",
        summary.final_score,
        summary.final_level,
        summary.best_score
    );
    Ok(())
}
