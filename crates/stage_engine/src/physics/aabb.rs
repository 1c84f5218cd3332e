//! Axis-aligned bounding box

use crate::foundation::math::Vec2;

/// Axis-aligned box stored as centre plus half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Centre in world space
    pub position: Vec2,
    /// Half of the width
    pub half_width: f32,
    /// Half of the height
    pub half_height: f32,
}

impl Aabb {
    /// Create a box from its centre and half extents
    pub fn new(x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            half_width,
            half_height,
        }
    }

    /// Full width
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Full height
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.position.x - self.half_width, self.position.y - self.half_height)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.position.x + self.half_width, self.position.y + self.half_height)
    }

    /// Check if this box contains a point (boundary included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point.x - self.position.x).abs() <= self.half_width &&
        (point.y - self.position.y).abs() <= self.half_height
    }

    /// Check if this box touches or overlaps another
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.position.x - other.position.x).abs() <= self.half_width + other.half_width &&
        (self.position.y - other.position.y).abs() <= self.half_height + other.half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let aabb = Aabb::new(10.0, 10.0, 5.0, 2.0);
        assert_eq!(aabb.min(), Vec2::new(5.0, 8.0));
        assert_eq!(aabb.max(), Vec2::new(15.0, 12.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 4.0);
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(&Aabb::new(2.0, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&Aabb::new(2.5, 0.0, 1.0, 1.0)));
        assert!(a.contains_point(Vec2::new(1.0, -1.0)));
    }
}
