//! # Core Engine Module
//!
//! Shared abstractions used throughout the engine.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the game and its subsystems

pub mod config;

pub use config::{
    GameConfig,
    EngineConfig,
    StageConfig,
    AudioConfig,
};
pub use crate::config::{Config, ConfigError};
