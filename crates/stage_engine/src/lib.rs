//! # Stage Engine
//!
//! A 2D scene world and the factory that populates it.
//!
//! ## Features
//!
//! - **Scene World**: Arena-backed object store with nested, capacity-limited groups
//! - **Object Factory**: One call to build and register sprites, buttons, groups,
//!   scroll zones, tilemaps, cameras, sounds and tweens
//! - **Physics Primitives**: Circles, boxes and tile-map cells
//! - **Tilemaps**: CSV and Tiled JSON map data
//! - **Configuration**: TOML and RON game configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use stage_engine::prelude::*;
//!
//! fn main() -> Result<(), GameError> {
//!     let mut game = Game::new(GameConfig::default())?;
//!
//!     let enemies = game.add().group(16)?;
//!     let player = game.add().sprite(400.0, 300.0, SpriteOptions::new("player"))?;
//!     let tween = game.add().tween(player.key(), true)?;
//!
//!     assert_eq!(game.world.tween_of(player.key()), Some(tween));
//!     assert_eq!(game.world.group(enemies.key())?.max_size(), 16);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;
pub mod foundation;

// Scene and its collaborators
pub mod world;
pub mod camera;
pub mod audio;
pub mod tween;
pub mod physics;
pub mod objects;

mod factory;
mod game;

#[cfg(test)]
mod tests;

pub use factory::{
    GameObjectFactory,
    ButtonOptions, SpriteOptions, SoundOptions, ScrollZoneOptions, TilemapOptions,
};
pub use game::{Game, GameError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Game, GameError,
        GameObjectFactory,
        ButtonOptions, SpriteOptions, SoundOptions, ScrollZoneOptions, TilemapOptions,
        foundation::math::{Vec2, Rect},
        world::{World, WorldError, GameObject, Group, ObjectId, ObjectHandle},
        camera::{Camera, CameraId},
        audio::SoundHandle,
        tween::{Tween, TweenHandle, TweenProperty, Easing},
        physics::{Circle, Aabb, TileMapCell, TileId},
        objects::{Sprite, Button, ButtonState, Frame, ScrollZone, Tilemap, TilemapFormat, DynamicTexture},
        core::{GameConfig, StageConfig, AudioConfig, EngineConfig, Config},
    };
}
