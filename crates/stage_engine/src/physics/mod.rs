//! Physics primitives
//!
//! Plain collision shapes handed out by the factory. They are not stored in
//! the world; a physics system owns them once created.

pub mod circle;
pub mod aabb;
pub mod tile_cell;

pub use circle::Circle;
pub use aabb::Aabb;
pub use tile_cell::{CollisionType, TileId, TileMapCell};
