//! Sound hook and persisted sound preferences.
//!
//! The core never produces audio itself; it signals the shell through
//! `AudioHook` when a click or purchase lands. Preferences (muted, volume)
//! persist separately from the game save so wiping a save keeps the player's
//! sound choices.

use serde::{Deserialize, Serialize};

use crate::storage::KvStore;

/// Storage key for the persisted sound preferences.
pub const SOUND_SETTINGS_KEY: &str = "biscoito_sound_settings";

/// Distinct sound cues the simulation emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    /// A manual cookie click.
    Click,
    /// A building or store upgrade purchase.
    Purchase,
}

/// Shell-side audio output. Implementations decide how (or whether) a cue
/// becomes sound.
pub trait AudioHook {
    fn play_effect(&mut self, effect: SoundEffect);
}

/// Does nothing. For tests and headless harnesses.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioHook for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
}

/// Player sound preferences, persisted as JSON.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SoundSettings {
    pub enabled: bool,
    /// Output gain in `0.0..=1.0`.
    pub volume: f64,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
        }
    }
}

impl SoundSettings {
    /// Load persisted preferences, falling back to defaults if absent or
    /// unparseable. Volume is clamped into range on the way in.
    pub fn load<S: KvStore>(store: &S) -> Self {
        let Some(json) = store.get(SOUND_SETTINGS_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&json) {
            Ok(mut settings) => {
                settings.volume = settings.volume.clamp(0.0, 1.0);
                settings
            }
            Err(e) => {
                log::warn!("discarding unparseable sound settings: {e}");
                Self::default()
            }
        }
    }

    /// Persist preferences. Failure is logged and otherwise ignored; sound
    /// settings are not worth interrupting play over.
    pub fn persist<S: KvStore>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = store.set(SOUND_SETTINGS_KEY, &json) {
                    log::warn!("sound settings not persisted: {e}");
                }
            }
            Err(e) => log::warn!("sound settings serialization failed: {e}"),
        }
    }
}
