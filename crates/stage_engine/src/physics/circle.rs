//! Circle collision shape

use crate::foundation::math::Vec2;

/// Circle defined by centre and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre in world space
    pub position: Vec2,
    /// Radius in pixels
    pub radius: f32,
}

impl Circle {
    /// Create a new circle
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            radius,
        }
    }

    /// Check if the circle contains a point (boundary included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.position).magnitude_squared() <= self.radius * self.radius
    }

    /// Check if this circle touches or overlaps another
    pub fn intersects(&self, other: &Circle) -> bool {
        let distance_squared = (self.position - other.position).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Overlap depth along the centre line (0.0 if apart)
    pub fn penetration_depth(&self, other: &Circle) -> f32 {
        let distance = (self.position - other.position).magnitude();
        (self.radius + other.radius - distance).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_touching_circles_intersect() {
        let a = Circle::new(0.0, 0.0, 1.0);
        let b = Circle::new(2.0, 0.0, 1.0);
        let c = Circle::new(3.0, 0.0, 0.5);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_penetration_depth() {
        let a = Circle::new(0.0, 0.0, 2.0);
        let b = Circle::new(3.0, 0.0, 2.0);
        assert_relative_eq!(a.penetration_depth(&b), 1.0);
        assert_relative_eq!(a.penetration_depth(&Circle::new(10.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_contains_point() {
        let circle = Circle::new(5.0, 5.0, 2.0);
        assert!(circle.contains_point(Vec2::new(5.0, 7.0)));
        assert!(!circle.contains_point(Vec2::new(7.0, 7.0)));
    }
}
