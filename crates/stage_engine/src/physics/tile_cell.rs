//! Tile-map collision cell

use crate::foundation::math::Vec2;

/// Tile shape identifier
///
/// `0` is empty, `1` is a full square; higher ids are shaped tiles
/// (slopes and rounded corners) up to [`TileId::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

impl TileId {
    /// No collision
    pub const EMPTY: Self = Self(0);
    /// Solid square
    pub const FULL: Self = Self(1);
    /// Highest shaped-tile id
    pub const MAX: Self = Self(33);
}

impl Default for TileId {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Broad collision category derived from a tile id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Nothing to collide with
    Empty,
    /// Whole cell is solid
    Full,
    /// Partially solid cell
    Shaped,
}

/// One cell of a collision tile map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMapCell {
    /// Centre of the cell in world space
    pub position: Vec2,
    /// Half of the cell width
    pub half_width: f32,
    /// Half of the cell height
    pub half_height: f32,
    id: TileId,
}

impl TileMapCell {
    /// Create an empty cell from its centre and half extents
    pub fn new(x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            half_width,
            half_height,
            id: TileId::EMPTY,
        }
    }

    /// Set the tile id, chaining
    ///
    /// Ids above [`TileId::MAX`] are clamped to it.
    #[must_use]
    pub fn set_state(mut self, id: TileId) -> Self {
        self.id = id.min(TileId::MAX);
        self
    }

    /// Current tile id
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Collision category of the current id
    pub fn collision_type(&self) -> CollisionType {
        match self.id {
            TileId::EMPTY => CollisionType::Empty,
            TileId::FULL => CollisionType::Full,
            _ => CollisionType::Shaped,
        }
    }

    /// Whether anything in the cell is solid
    pub fn is_solid(&self) -> bool {
        self.id != TileId::EMPTY
    }

    /// Cell clear of any collision
    pub fn clear(&mut self) {
        self.id = TileId::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = TileMapCell::new(8.0, 8.0, 8.0, 8.0);
        assert_eq!(cell.id(), TileId::EMPTY);
        assert!(!cell.is_solid());
        assert_eq!(cell.collision_type(), CollisionType::Empty);
    }

    #[test]
    fn test_set_state_chains() {
        let cell = TileMapCell::new(0.0, 0.0, 4.0, 4.0).set_state(TileId::FULL);
        assert_eq!(cell.collision_type(), CollisionType::Full);

        let mut shaped = cell.set_state(TileId(7));
        assert_eq!(shaped.collision_type(), CollisionType::Shaped);
        shaped.clear();
        assert!(!shaped.is_solid());
    }

    #[test]
    fn test_out_of_range_id_is_clamped() {
        let cell = TileMapCell::new(0.0, 0.0, 4.0, 4.0).set_state(TileId(200));
        assert_eq!(cell.id(), TileId::MAX);
    }
}
