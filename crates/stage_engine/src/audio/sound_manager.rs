//! Sound asset management
//!
//! Registers sounds by asset key with a volume and loop flag, and applies
//! the master volume and mute state on top.

use slotmap::SlotMap;

use crate::core::AudioConfig;

slotmap::new_key_type! {
    /// Handle to a registered sound
    pub struct SoundHandle;
}

/// A registered sound instance
#[derive(Debug, Clone)]
pub struct Sound {
    key: String,
    volume: f32,
    /// Restart when playback reaches the end
    pub looped: bool,
    playing: bool,
}

impl Sound {
    /// Create a sound for an audio asset key; volume is clamped to `[0, 1]`
    pub fn new(key: impl Into<String>, volume: f32, looped: bool) -> Self {
        Self {
            key: key.into(),
            volume: clamp_volume(volume),
            looped,
            playing: false,
        }
    }

    /// Asset key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Per-sound volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set per-sound volume, clamped to `[0, 1]`
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    /// Whether the sound has been started and not stopped
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Mark the sound as playing
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Mark the sound as stopped
    pub fn stop(&mut self) {
        self.playing = false;
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Sound manager
#[derive(Debug)]
pub struct SoundManager {
    sounds: SlotMap<SoundHandle, Sound>,
    master_volume: f32,
    muted: bool,
}

impl SoundManager {
    /// Create a new sound manager
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            sounds: SlotMap::with_key(),
            master_volume: clamp_volume(config.master_volume),
            muted: config.muted,
        }
    }

    /// Register a sound for an asset key
    pub fn add(&mut self, key: &str, volume: f32, looped: bool) -> SoundHandle {
        let handle = self.sounds.insert(Sound::new(key, volume, looped));
        log::debug!("Registered sound '{}' (volume {}, loop {})", key, volume, looped);
        handle
    }

    /// Look up a sound
    pub fn get(&self, handle: SoundHandle) -> Option<&Sound> {
        self.sounds.get(handle)
    }

    /// Look up a sound mutably
    pub fn get_mut(&mut self, handle: SoundHandle) -> Option<&mut Sound> {
        self.sounds.get_mut(handle)
    }

    /// Unregister a sound
    pub fn remove(&mut self, handle: SoundHandle) -> Option<Sound> {
        self.sounds.remove(handle)
    }

    /// Number of registered sounds
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether no sounds are registered
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Master volume
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Set master volume, clamped to `[0, 1]`
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = clamp_volume(volume);
    }

    /// Whether all output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mute or unmute all output
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Volume a sound would be heard at after master volume and mute
    pub fn effective_volume(&self, handle: SoundHandle) -> Option<f32> {
        let sound = self.sounds.get(handle)?;
        if self.muted {
            Some(0.0)
        } else {
            Some(sound.volume * self.master_volume)
        }
    }

    /// Stop every sound
    pub fn stop_all(&mut self) {
        for sound in self.sounds.values_mut() {
            sound.stop();
        }
    }
}

impl Default for SoundManager {
    fn default() -> Self {
        Self::new(&AudioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_registers_with_flags() {
        let mut manager = SoundManager::default();
        let handle = manager.add("boom", 0.5, true);

        let sound = manager.get(handle).unwrap();
        assert_eq!(sound.key(), "boom");
        assert_relative_eq!(sound.volume(), 0.5);
        assert!(sound.looped);
        assert!(!sound.is_playing());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut manager = SoundManager::default();
        let loud = manager.add("loud", 3.0, false);
        let quiet = manager.add("quiet", -1.0, false);
        assert_relative_eq!(manager.get(loud).unwrap().volume(), 1.0);
        assert_relative_eq!(manager.get(quiet).unwrap().volume(), 0.0);
    }

    #[test]
    fn test_effective_volume() {
        let mut manager = SoundManager::new(&AudioConfig { master_volume: 0.5, muted: false });
        let handle = manager.add("music", 0.8, true);
        assert_relative_eq!(manager.effective_volume(handle).unwrap(), 0.4);

        manager.set_muted(true);
        assert_relative_eq!(manager.effective_volume(handle).unwrap(), 0.0);
    }

    #[test]
    fn test_stop_all() {
        let mut manager = SoundManager::default();
        let a = manager.add("a", 1.0, false);
        let b = manager.add("b", 1.0, false);
        manager.get_mut(a).unwrap().play();
        manager.get_mut(b).unwrap().play();

        manager.stop_all();
        assert!(!manager.get(a).unwrap().is_playing());
        assert!(!manager.get(b).unwrap().is_playing());
    }
}
