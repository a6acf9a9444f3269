//! Kira-backed sound playback.

use super::{AudioError, AudioSink, SoundCue};
use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Plays cached WAV files through Kira's default output device.
pub struct KiraAudio {
    manager: AudioManager<DefaultBackend>,
    sounds: HashMap<SoundCue, StaticSoundData>,
}

impl KiraAudio {
    /// Open the output device and preload every cue from `sounds_dir`.
    /// Cues whose file is missing or undecodable stay silent.
    pub fn new(sounds_dir: &Path) -> Result<Self, AudioError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AudioError::NoDevice(e.to_string()))?;

        let mut sounds = HashMap::new();
        for cue in SoundCue::ALL {
            match load_sound(&cue.path_in(sounds_dir)) {
                Ok(data) => {
                    sounds.insert(cue, data);
                }
                Err(e) => warn!(cue = cue.id(), error = %e, "sound unavailable"),
            }
        }
        info!(loaded = sounds.len(), "audio ready");

        Ok(Self { manager, sounds })
    }
}

fn load_sound(path: &Path) -> Result<StaticSoundData, AudioError> {
    if !path.exists() {
        return Err(AudioError::NotFound(path.to_path_buf()));
    }
    StaticSoundData::from_file(path).map_err(|e| AudioError::Load {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

impl AudioSink for KiraAudio {
    fn play(&mut self, cue: SoundCue) {
        let Some(data) = self.sounds.get(&cue) else {
            debug!(cue = cue.id(), "no sound loaded for cue");
            return;
        };
        if let Err(e) = self.manager.play(data.clone()) {
            let err = AudioError::Play {
                cue: cue.id(),
                details: e.to_string(),
            };
            warn!(error = %err, "sound playback failed");
        }
    }
}
