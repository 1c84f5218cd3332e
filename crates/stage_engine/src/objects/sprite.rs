//! Sprite - a textured object at a world position

use crate::foundation::math::Vec2;

/// Frame selector inside a sprite sheet or texture atlas
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Frame by numeric index
    Index(u32),
    /// Frame by atlas name
    Name(String),
}

impl From<u32> for Frame {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Frame {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Frame {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Textured game object
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Position in world space
    pub position: Vec2,
    /// Texture key; empty means no texture
    pub key: String,
    /// Frame inside the texture, if it is a sheet or atlas
    pub frame: Option<Frame>,
    /// Scale factors
    pub scale: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
    /// Whether the sprite is drawn
    pub visible: bool,
}

impl Sprite {
    /// Create a sprite at a position with a texture key
    pub fn new(x: f32, y: f32, key: impl Into<String>) -> Self {
        Self {
            position: Vec2::new(x, y),
            key: key.into(),
            frame: None,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            alpha: 1.0,
            visible: true,
        }
    }

    /// Select a frame
    pub fn with_frame(mut self, frame: impl Into<Frame>) -> Self {
        self.frame = Some(frame.into());
        self
    }

    /// Whether a texture has been assigned
    pub fn has_texture(&self) -> bool {
        !self.key.is_empty()
    }

    /// Move to a position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(0.0, 0.0, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sprite = Sprite::default();
        assert!(!sprite.has_texture());
        assert_eq!(sprite.frame, None);
        assert_eq!(sprite.scale, Vec2::new(1.0, 1.0));
        assert_eq!(sprite.alpha, 1.0);
    }

    #[test]
    fn test_frame_conversions() {
        assert_eq!(Sprite::new(0.0, 0.0, "sheet").with_frame(3u32).frame, Some(Frame::Index(3)));
        assert_eq!(
            Sprite::new(0.0, 0.0, "atlas").with_frame("walk_01").frame,
            Some(Frame::Name("walk_01".to_string()))
        );
    }
}
