//! Maps [`TickEvent`]s to sound cues and log lines.
//!
//! This is a binary-only module (not part of `lib.rs`) because it bridges
//! pure game-logic events to the audio backend.

use flappy::audio::AudioSink;
use flappy::core::tick::TickEvent;
use tracing::{debug, info};

/// Forward sound events to `audio` and log the rest.
pub fn apply_tick_events(events: &[TickEvent], audio: &mut dyn AudioSink) {
    for event in events {
        match event {
            TickEvent::PlaySound(cue) => audio.play(*cue),
            TickEvent::ObstacleSpawned { gap_top } => {
                debug!(gap_top, "obstacle pair spawned");
            }
            TickEvent::CoinCollected { score } => {
                debug!(score, "coin collected");
            }
            TickEvent::CoinMissed => {
                debug!("coin removed (off-screen)");
            }
            TickEvent::GameOver { cause, score } => {
                info!(?cause, score, "game over");
            }
            TickEvent::Restarted => {
                info!("game restarted");
            }
        }
    }
}
