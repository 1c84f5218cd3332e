//! Scroll zone - a rectangular window onto a continuously scrolling texture

use crate::foundation::math::{Rect, Vec2};

/// Scrolling texture region
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollZone {
    /// Texture key
    pub key: String,
    /// Top-left corner in world space
    pub position: Vec2,
    /// Width of the region; 0 means the texture's own width
    pub width: f32,
    /// Height of the region; 0 means the texture's own height
    pub height: f32,
    /// Scroll speed in pixels per second
    pub scroll_speed: Vec2,
    offset: Vec2,
}

impl ScrollZone {
    /// Create a scroll zone
    pub fn new(key: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            position: Vec2::new(x, y),
            width,
            height,
            scroll_speed: Vec2::zeros(),
            offset: Vec2::zeros(),
        }
    }

    /// Set the scroll speed
    pub fn with_speed(mut self, x: f32, y: f32) -> Self {
        self.scroll_speed = Vec2::new(x, y);
        self
    }

    /// Current texture offset, wrapped to the region size
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Region covered in world space
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Advance the texture offset by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        self.offset += self.scroll_speed * delta_time;
        if self.width > 0.0 {
            self.offset.x = self.offset.x.rem_euclid(self.width);
        }
        if self.height > 0.0 {
            self.offset.y = self.offset.y.rem_euclid(self.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_wraps() {
        let mut zone = ScrollZone::new("clouds", 0.0, 0.0, 100.0, 50.0).with_speed(40.0, -20.0);
        zone.update(3.0);
        assert_relative_eq!(zone.offset().x, 20.0);
        assert_relative_eq!(zone.offset().y, 40.0);
    }

    #[test]
    fn test_zero_size_does_not_wrap() {
        let mut zone = ScrollZone::new("clouds", 0.0, 0.0, 0.0, 0.0).with_speed(10.0, 0.0);
        zone.update(15.0);
        assert_relative_eq!(zone.offset().x, 150.0);
    }
}
