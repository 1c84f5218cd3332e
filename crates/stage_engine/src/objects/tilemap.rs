//! Tilemap - layered grid of tile indices parsed from CSV or Tiled JSON
//!
//! CSV data is a single layer: one row per line, comma separated tile
//! indices. Tiled JSON data may hold several tile layers; object and image
//! layers are skipped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::Vec2;

/// Source format of map data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TilemapFormat {
    /// Comma separated rows
    Csv,
    /// JSON exported from the Tiled editor
    TiledJson,
}

/// Errors raised while parsing map data
#[derive(Error, Debug)]
pub enum TilemapError {
    /// No rows or no tile layers
    #[error("Map data contains no tiles")]
    Empty,

    /// CSV data carries no tile size, so one must be passed in
    #[error("Tile width and height must be non-zero for CSV maps")]
    MissingTileSize,

    /// A CSV row has a different length from the first row
    #[error("Row {row} has {found} tiles, expected {expected}")]
    Ragged {
        /// Zero-based row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of this row
        found: usize,
    },

    /// A CSV cell is not a tile index
    #[error("Invalid tile '{value}' at row {row}, column {column}")]
    InvalidTile {
        /// Zero-based row
        row: usize,
        /// Zero-based column
        column: usize,
        /// Offending text
        value: String,
    },

    /// A Tiled layer's data does not match its declared size
    #[error("Layer '{name}' has {found} tiles, expected {expected}")]
    LayerSize {
        /// Layer name
        name: String,
        /// `width * height`
        expected: usize,
        /// Length of `data`
        found: usize,
    },

    /// A Tiled layer declares more tiles than can be addressed
    #[error("Layer '{name}' is too large ({width}x{height})")]
    LayerTooLarge {
        /// Layer name
        name: String,
        /// Declared width in tiles
        width: usize,
        /// Declared height in tiles
        height: usize,
    },

    /// Malformed JSON
    #[error("Invalid Tiled JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One grid of tile indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilemapLayer {
    /// Layer name (empty for CSV maps)
    pub name: String,
    width: usize,
    height: usize,
    tiles: Vec<u32>,
}

impl TilemapLayer {
    /// Width in tiles
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile index at a grid position
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x).copied()
    }

    /// Replace the tile index at a grid position; returns the old index
    pub fn set(&mut self, x: usize, y: usize, tile: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let slot = self.tiles.get_mut(y * self.width + x)?;
        Some(std::mem::replace(slot, tile))
    }

    /// Row-major tile indices
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }
}

#[derive(Deserialize)]
struct TiledMap {
    #[serde(default)]
    tilewidth: u32,
    #[serde(default)]
    tileheight: u32,
    #[serde(default)]
    layers: Vec<TiledLayer>,
}

#[derive(Deserialize)]
struct TiledLayer {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    width: usize,
    #[serde(default)]
    height: usize,
    #[serde(default)]
    data: Vec<u32>,
}

/// Tile map game object
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    /// Tileset texture key
    pub key: String,
    /// Top-left corner in world space
    pub position: Vec2,
    /// Whether adding this map resizes the world to fit it
    pub resize_world: bool,
    /// Whether the map is drawn
    pub visible: bool,
    format: TilemapFormat,
    layers: Vec<TilemapLayer>,
    tile_width: u32,
    tile_height: u32,
}

impl Tilemap {
    /// Parse map data
    ///
    /// A tile size of zero falls back to the size stored in Tiled JSON; CSV
    /// maps have no stored size and fail with [`TilemapError::MissingTileSize`].
    pub fn new(
        key: impl Into<String>,
        map_data: &str,
        format: TilemapFormat,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, TilemapError> {
        let key = key.into();
        let (layers, tile_width, tile_height) = match format {
            TilemapFormat::Csv => {
                if tile_width == 0 || tile_height == 0 {
                    return Err(TilemapError::MissingTileSize);
                }
                (vec![parse_csv(map_data)?], tile_width, tile_height)
            }
            TilemapFormat::TiledJson => {
                let map: TiledMap = serde_json::from_str(map_data)?;
                let width = if tile_width > 0 { tile_width } else { map.tilewidth };
                let height = if tile_height > 0 { tile_height } else { map.tileheight };
                if width == 0 || height == 0 {
                    return Err(TilemapError::MissingTileSize);
                }
                (parse_tiled_layers(map.layers)?, width, height)
            }
        };

        log::debug!(
            "Parsed {:?} tilemap '{}': {} layer(s), tiles {}x{}",
            format, key, layers.len(), tile_width, tile_height
        );

        Ok(Self {
            key,
            position: Vec2::zeros(),
            resize_world: true,
            visible: true,
            format,
            layers,
            tile_width,
            tile_height,
        })
    }

    /// Set whether adding the map resizes the world
    pub fn with_resize_world(mut self, resize_world: bool) -> Self {
        self.resize_world = resize_world;
        self
    }

    /// Format the map was parsed from
    pub fn format(&self) -> TilemapFormat {
        self.format
    }

    /// Tile width in pixels
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// All layers, bottom first
    pub fn layers(&self) -> &[TilemapLayer] {
        &self.layers
    }

    /// One layer
    pub fn layer(&self, index: usize) -> Option<&TilemapLayer> {
        self.layers.get(index)
    }

    /// One layer, mutably
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut TilemapLayer> {
        self.layers.get_mut(index)
    }

    /// Width of the widest layer, in tiles
    pub fn width_in_tiles(&self) -> usize {
        self.layers.iter().map(TilemapLayer::width).max().unwrap_or(0)
    }

    /// Height of the tallest layer, in tiles
    pub fn height_in_tiles(&self) -> usize {
        self.layers.iter().map(TilemapLayer::height).max().unwrap_or(0)
    }

    /// Width in pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn width_in_pixels(&self) -> f32 {
        self.width_in_tiles() as f32 * self.tile_width as f32
    }

    /// Height in pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn height_in_pixels(&self) -> f32 {
        self.height_in_tiles() as f32 * self.tile_height as f32
    }

    /// Tile index under a world-space point
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn tile_at_world(&self, layer: usize, point: Vec2) -> Option<u32> {
        let local = point - self.position;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let x = (local.x / self.tile_width as f32).floor() as usize;
        let y = (local.y / self.tile_height as f32).floor() as usize;
        self.layer(layer)?.get(x, y)
    }
}

fn parse_csv(data: &str) -> Result<TilemapLayer, TilemapError> {
    let mut tiles = Vec::new();
    let mut width = 0;
    let mut height = 0;

    for line in data.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let cells: Vec<&str> = line
            .strip_suffix(',')
            .unwrap_or(line)
            .split(',')
            .map(str::trim)
            .collect();

        if height == 0 {
            width = cells.len();
        } else if cells.len() != width {
            return Err(TilemapError::Ragged { row: height, expected: width, found: cells.len() });
        }

        for (column, cell) in cells.iter().enumerate() {
            let tile = cell.parse::<u32>().map_err(|_| TilemapError::InvalidTile {
                row: height,
                column,
                value: (*cell).to_string(),
            })?;
            tiles.push(tile);
        }
        height += 1;
    }

    if height == 0 {
        return Err(TilemapError::Empty);
    }

    Ok(TilemapLayer {
        name: String::new(),
        width,
        height,
        tiles,
    })
}

fn parse_tiled_layers(layers: Vec<TiledLayer>) -> Result<Vec<TilemapLayer>, TilemapError> {
    let mut parsed = Vec::new();

    for layer in layers {
        if !layer.kind.is_empty() && layer.kind != "tilelayer" {
            log::trace!("Skipping Tiled {} layer '{}'", layer.kind, layer.name);
            continue;
        }

        let Some(expected) = layer.width.checked_mul(layer.height) else {
            return Err(TilemapError::LayerTooLarge {
                name: layer.name,
                width: layer.width,
                height: layer.height,
            });
        };
        if layer.data.len() != expected {
            return Err(TilemapError::LayerSize {
                name: layer.name,
                expected,
                found: layer.data.len(),
            });
        }

        parsed.push(TilemapLayer {
            name: layer.name,
            width: layer.width,
            height: layer.height,
            tiles: layer.data,
        });
    }

    if parsed.iter().all(|layer| layer.tiles.is_empty()) {
        return Err(TilemapError::Empty);
    }

    Ok(parsed)
}
