//! Game object factory
//!
//! A quick way to create new world objects and add existing objects to the
//! current world. Obtained through [`Game::add`]:
//!
//! ```
//! use stage_engine::prelude::*;
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let ship = game.add().sprite(100.0, 50.0, SpriteOptions::new("ship")).unwrap();
//! assert_eq!(game.world.get(ship).unwrap().key, "ship");
//! ```
//!
//! Every method forwards its parameters to the matching constructor or
//! manager. Objects that live in the world are appended to its root group;
//! physics shapes and dynamic textures are returned to the caller unowned.

use crate::{
    audio::SoundHandle,
    camera::CameraId,
    game::{Game, GameError},
    objects::{Button, ButtonCallback, DynamicTexture, Frame, ScrollZone, Sprite, Tilemap, TilemapFormat},
    physics::{Aabb, Circle, TileId, TileMapCell},
    tween::{Tween, TweenError, TweenHandle},
    world::{Group, ObjectHandle, ObjectId, WorldError},
};

/// Optional sprite parameters
#[derive(Debug, Clone, Default)]
pub struct SpriteOptions {
    /// Texture key (default: none)
    pub key: String,
    /// Sheet or atlas frame (default: none)
    pub frame: Option<Frame>,
}

impl SpriteOptions {
    /// Options with a texture key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            frame: None,
        }
    }

    /// Select a frame
    pub fn with_frame(mut self, frame: impl Into<Frame>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

/// Button parameters; every field is optional
#[derive(Default)]
pub struct ButtonOptions {
    /// Horizontal position (default 0)
    pub x: f32,
    /// Vertical position (default 0)
    pub y: f32,
    /// Texture key (default: none)
    pub key: Option<String>,
    /// Click handler (default: none)
    pub callback: Option<ButtonCallback>,
    /// Hover frame (default: none)
    pub over_frame: Option<Frame>,
    /// Out frame (default: none)
    pub out_frame: Option<Frame>,
    /// Pressed frame (default: none)
    pub down_frame: Option<Frame>,
}

impl ButtonOptions {
    /// Options at a position with a texture key
    pub fn new(x: f32, y: f32, key: impl Into<String>) -> Self {
        Self {
            x,
            y,
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Set the click handler
    pub fn with_callback(mut self, callback: impl FnMut(&Button) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Set the over, out and down frames
    pub fn with_frames(
        mut self,
        over_frame: impl Into<Frame>,
        out_frame: impl Into<Frame>,
        down_frame: impl Into<Frame>,
    ) -> Self {
        self.over_frame = Some(over_frame.into());
        self.out_frame = Some(out_frame.into());
        self.down_frame = Some(down_frame.into());
        self
    }
}

/// Optional sound parameters
#[derive(Debug, Clone, Copy)]
pub struct SoundOptions {
    /// Volume (default 1.0)
    pub volume: f32,
    /// Loop playback (default false)
    pub looped: bool,
}

impl Default for SoundOptions {
    fn default() -> Self {
        Self {
            volume: 1.0,
            looped: false,
        }
    }
}

/// Optional scroll zone parameters; all default to 0
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollZoneOptions {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// Width (0 = texture width)
    pub width: f32,
    /// Height (0 = texture height)
    pub height: f32,
}

/// Optional tilemap parameters
#[derive(Debug, Clone, Copy)]
pub struct TilemapOptions {
    /// Resize the world to the map (default true)
    pub resize_world: bool,
    /// Tile width (default 0 = from map data)
    pub tile_width: u32,
    /// Tile height (default 0 = from map data)
    pub tile_height: u32,
}

impl TilemapOptions {
    /// Options with an explicit tile size
    pub fn with_tile_size(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            ..Self::default()
        }
    }
}

impl Default for TilemapOptions {
    fn default() -> Self {
        Self {
            resize_world: true,
            tile_width: 0,
            tile_height: 0,
        }
    }
}

/// Factory bound to a running game
pub struct GameObjectFactory<'a> {
    game: &'a mut Game,
}

impl<'a> GameObjectFactory<'a> {
    pub(crate) fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    /// Create a new camera with specific position and size
    pub fn camera(&mut self, x: f32, y: f32, width: f32, height: f32) -> CameraId {
        self.game.world.cameras.add_camera(x, y, width, height)
    }

    /// Create a new button and add it to the world
    pub fn button(&mut self, options: ButtonOptions) -> Result<ObjectHandle<Button>, WorldError> {
        let mut button = Button::new(options.x, options.y, options.key.as_deref())
            .with_frames(options.over_frame, options.out_frame, options.down_frame);
        button.set_callback(options.callback);
        self.game.world.add(button)
    }

    /// Create a new sprite with a position and optional texture, and add it to the world
    pub fn sprite(&mut self, x: f32, y: f32, options: SpriteOptions) -> Result<ObjectHandle<Sprite>, WorldError> {
        let mut sprite = Sprite::new(x, y, options.key);
        sprite.frame = options.frame;
        self.game.world.add(sprite)
    }

    /// Register a sound for an audio asset key
    pub fn audio(&mut self, key: &str, options: SoundOptions) -> SoundHandle {
        self.game.sound.add(key, options.volume, options.looped)
    }

    /// Create a physics circle
    pub fn circle(&self, x: f32, y: f32, radius: f32) -> Circle {
        Circle::new(x, y, radius)
    }

    /// Create a physics box from its centre and full size
    ///
    /// The half extents are the halved size rounded down.
    pub fn aabb(&self, x: f32, y: f32, width: f32, height: f32) -> Aabb {
        Aabb::new(x, y, (width / 2.0).floor(), (height / 2.0).floor())
    }

    /// Create a solid tile-map cell from its centre and half extents
    pub fn cell(&self, x: f32, y: f32, half_width: f32, half_height: f32) -> TileMapCell {
        self.cell_with_state(x, y, half_width, half_height, TileId::FULL)
    }

    /// Create a tile-map cell with a specific tile id
    pub fn cell_with_state(&self, x: f32, y: f32, half_width: f32, half_height: f32, state: TileId) -> TileMapCell {
        TileMapCell::new(x, y, half_width, half_height).set_state(state)
    }

    /// Create a new dynamic texture with a specific size
    pub fn dynamic_texture(&self, width: u32, height: u32) -> DynamicTexture {
        DynamicTexture::new(width, height)
    }

    /// Create a new group and add it to the world (`max_size` 0 = unbounded)
    pub fn group(&mut self, max_size: usize) -> Result<ObjectHandle<Group>, WorldError> {
        self.game.world.add(Group::new(max_size))
    }

    /// Create a new scroll zone and add it to the world
    pub fn scroll_zone(&mut self, key: &str, options: ScrollZoneOptions) -> Result<ObjectHandle<ScrollZone>, WorldError> {
        let zone = ScrollZone::new(key, options.x, options.y, options.width, options.height);
        self.game.world.add(zone)
    }

    /// Parse a new tilemap and add it to the world
    pub fn tilemap(
        &mut self,
        key: &str,
        map_data: &str,
        format: TilemapFormat,
        options: TilemapOptions,
    ) -> Result<ObjectHandle<Tilemap>, GameError> {
        let tilemap = Tilemap::new(key, map_data, format, options.tile_width, options.tile_height)?
            .with_resize_world(options.resize_world);
        Ok(self.insert_tilemap(tilemap)?)
    }

    /// Create a tween for a world object
    ///
    /// With `local_reference` the handle is also stored on the object,
    /// replacing any handle already there.
    pub fn tween(&mut self, target: ObjectId, local_reference: bool) -> Result<TweenHandle, TweenError> {
        let game = &mut *self.game;
        game.tweens.create(&mut game.world, target, local_reference)
    }

    /// Add an existing sprite to the world
    pub fn existing_sprite(&mut self, sprite: Sprite) -> Result<ObjectHandle<Sprite>, WorldError> {
        self.game.world.add(sprite)
    }

    /// Add an existing group to the world
    pub fn existing_group(&mut self, group: Group) -> Result<ObjectHandle<Group>, WorldError> {
        self.game.world.add(group)
    }

    /// Add an existing button to the world
    pub fn existing_button(&mut self, button: Button) -> Result<ObjectHandle<Button>, WorldError> {
        self.game.world.add(button)
    }

    /// Add an existing scroll zone to the world
    pub fn existing_scroll_zone(&mut self, zone: ScrollZone) -> Result<ObjectHandle<ScrollZone>, WorldError> {
        self.game.world.add(zone)
    }

    /// Add an existing tilemap to the world
    ///
    /// Honours the map's `resize_world` flag.
    pub fn existing_tilemap(&mut self, tilemap: Tilemap) -> Result<ObjectHandle<Tilemap>, WorldError> {
        self.insert_tilemap(tilemap)
    }

    /// Register an existing tween
    pub fn existing_tween(&mut self, tween: Tween) -> TweenHandle {
        self.game.tweens.add(tween)
    }

    fn insert_tilemap(&mut self, tilemap: Tilemap) -> Result<ObjectHandle<Tilemap>, WorldError> {
        let resize = tilemap
            .resize_world
            .then(|| (tilemap.width_in_pixels(), tilemap.height_in_pixels()));

        let handle = self.game.world.add(tilemap)?;
        if let Some((width, height)) = resize {
            self.game.world.set_bounds(width, height);
        }
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::physics::CollisionType;

    fn game() -> Game {
        Game::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_aabb_halves_and_floors() {
        let mut game = game();
        let aabb = game.add().aabb(10.0, 20.0, 33.0, 17.0);
        assert_eq!(aabb.half_width, 16.0);
        assert_eq!(aabb.half_height, 8.0);
        assert_eq!(aabb.position.x, 10.0);
    }

    #[test]
    fn test_cell_defaults_to_full() {
        let mut game = game();
        let cell = game.add().cell(8.0, 8.0, 8.0, 8.0);
        assert_eq!(cell.id(), TileId::FULL);
        assert_eq!(cell.half_width, 8.0);

        let empty = game.add().cell_with_state(8.0, 8.0, 8.0, 8.0, TileId::EMPTY);
        assert_eq!(empty.collision_type(), CollisionType::Empty);
    }

    #[test]
    fn test_unowned_objects_do_not_touch_world() {
        let mut game = game();
        let _ = game.add().circle(0.0, 0.0, 5.0);
        let _ = game.add().dynamic_texture(16, 16);
        let _ = game.add().aabb(0.0, 0.0, 4.0, 4.0);
        assert!(game.world.is_empty());
    }

    #[test]
    fn test_sound_defaults() {
        let mut game = game();
        let handle = game.add().audio("theme", SoundOptions::default());
        let sound = game.sound.get(handle).unwrap();
        assert_eq!(sound.volume(), 1.0);
        assert!(!sound.looped);
    }
}
