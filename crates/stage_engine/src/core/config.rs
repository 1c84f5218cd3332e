//! # Unified Configuration System
//!
//! Configuration for the game as a whole and for each subsystem the game owns.
//! All types round-trip through TOML and RON via the [`Config`] trait.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: Logging and debug behaviour
//! - **Stage Config**: Stage size, initial world bounds and the default camera
//! - **Audio Config**: Master volume and mute state for the sound manager

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Core engine behaviour that affects the entire game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Stage Configuration
///
/// The visible stage size. The world starts with bounds equal to the stage
/// and the default camera (when enabled) covers the whole stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Stage width in pixels
    pub width: f32,
    /// Stage height in pixels
    pub height: f32,
    /// Whether the camera manager starts with a stage-sized camera
    pub default_camera: bool,
}

impl StageConfig {
    /// Create a stage configuration of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            default_camera: true,
        }
    }

    /// Enable or disable the default camera
    pub fn with_default_camera(mut self, enabled: bool) -> Self {
        self.default_camera = enabled;
        self
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// # Audio Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume in `[0, 1]`
    pub master_volume: f32,
    /// Start muted
    pub muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            muted: false,
        }
    }
}

/// # Complete Game Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Stage and world configuration
    pub stage: StageConfig,
    /// Sound manager configuration
    pub audio: AudioConfig,
}

impl GameConfig {
    /// Set the stage configuration
    pub fn with_stage(mut self, stage: StageConfig) -> Self {
        self.stage = stage;
        self
    }

    /// Set the audio configuration
    pub fn with_audio(mut self, audio: AudioConfig) -> Self {
        self.audio = audio;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stage.width > 0.0 && self.stage.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Stage size must be positive, got {}x{}",
                self.stage.width, self.stage.height
            )));
        }

        if !(0.0..=1.0).contains(&self.audio.master_volume) {
            return Err(ConfigError::Invalid(format!(
                "Master volume must be within [0, 1], got {}",
                self.audio.master_volume
            )));
        }

        if self.engine.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}'",
                self.engine.log_level
            )));
        }

        Ok(())
    }
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stage.width, 800.0);
        assert_eq!(config.stage.height, 600.0);
        assert!(config.stage.default_camera);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig::default().with_stage(StageConfig::new(0.0, 600.0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig::default().with_audio(AudioConfig { master_volume: 1.5, muted: false });
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.engine = config.engine.with_log_level("loud");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("[stage]\nwidth = 1024.0\n").unwrap();
        assert_eq!(config.stage.width, 1024.0);
        assert_eq!(config.stage.height, 600.0);
        assert_eq!(config.engine.log_level, "info");
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = std::env::temp_dir().join(format!("stage_engine_config_{}.ron", std::process::id()));
        let config = GameConfig::default().with_stage(StageConfig::new(320.0, 240.0).with_default_camera(false));

        config.save_to_file(&path).unwrap();
        let loaded = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.stage.width, 320.0);
        assert!(!loaded.stage.default_camera);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = GameConfig::default().save_to_file("config.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
