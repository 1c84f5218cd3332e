//! Display objects
//!
//! Concrete object types that the factory builds. All of them except
//! [`DynamicTexture`] can live in the world.

pub mod sprite;
pub mod button;
pub mod scroll_zone;
pub mod tilemap;
pub mod dynamic_texture;

pub use sprite::{Frame, Sprite};
pub use button::{Button, ButtonCallback, ButtonState};
pub use scroll_zone::ScrollZone;
pub use tilemap::{Tilemap, TilemapError, TilemapFormat, TilemapLayer};
pub use dynamic_texture::DynamicTexture;
