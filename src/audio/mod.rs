//! Sound output.
//!
//! The game loop only emits [`SoundCue`]s. An [`AudioSink`] turns them into
//! sound, and a sink must never fail loudly: missing files or a missing
//! output device are logged and the cue is dropped.

#[cfg(feature = "audio")]
mod kira_backend;

#[cfg(feature = "audio")]
pub use kira_backend::KiraAudio;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Named sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Coin,
}

impl SoundCue {
    pub const ALL: [SoundCue; 2] = [SoundCue::Jump, SoundCue::Coin];

    /// Sound identifier, also the file stem under the sounds directory.
    pub fn id(&self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::Coin => "coin",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.wav", self.id())
    }

    pub fn path_in(&self, sounds_dir: &Path) -> PathBuf {
        sounds_dir.join(self.file_name())
    }
}

/// Errors raised while setting up sound playback.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    NoDevice(String),

    #[error("sound file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load '{}': {details}", .path.display())]
    Load { path: PathBuf, details: String },

    #[error("failed to play '{cue}': {details}")]
    Play { cue: &'static str, details: String },
}

/// Fire-and-forget consumer of sound cues.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink used when sound is disabled or unavailable.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: SoundCue) {
        debug!(cue = cue.id(), "sound cue (silent)");
    }
}

/// Open the best available sink for `sounds_dir`.
#[cfg(feature = "audio")]
pub fn open_audio(sounds_dir: &Path) -> Box<dyn AudioSink> {
    match KiraAudio::new(sounds_dir) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            tracing::warn!(error = %e, "audio unavailable, running silent");
            Box::new(SilentAudio)
        }
    }
}

/// Open the best available sink for `sounds_dir`.
#[cfg(not(feature = "audio"))]
pub fn open_audio(sounds_dir: &Path) -> Box<dyn AudioSink> {
    debug!(dir = %sounds_dir.display(), "built without the `audio` feature, running silent");
    Box::new(SilentAudio)
}
