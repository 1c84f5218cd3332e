//! # 2D Camera
//!
//! A camera is a viewport rectangle on the stage plus a scroll offset into
//! the world. Screen point `p` inside the viewport shows world point
//! `p - viewport.origin + scroll`.

use crate::foundation::math::{Rect, Vec2};

/// Identifier of a camera inside its manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub(super) u32);

impl CameraId {
    /// Raw id value
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// 2D camera viewport
#[derive(Debug, Clone)]
pub struct Camera {
    id: CameraId,
    /// Viewport on the stage, in pixels
    pub viewport: Rect,
    /// World-space offset of the viewport's top-left corner
    pub scroll: Vec2,
    /// Whether this camera renders
    pub visible: bool,
}

impl Camera {
    pub(super) fn new(id: CameraId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            viewport: Rect::new(x, y, width, height),
            scroll: Vec2::zeros(),
            visible: true,
        }
    }

    /// Camera id
    pub fn id(&self) -> CameraId {
        self.id
    }

    /// Move the viewport on the stage
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.viewport.x = x;
        self.viewport.y = y;
        log::trace!("Camera {:?} moved to ({}, {})", self.id, x, y);
    }

    /// Resize the viewport
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Scroll so that `point` sits at the centre of the viewport
    pub fn focus_on(&mut self, point: Vec2) {
        self.scroll = Vec2::new(
            point.x - self.viewport.width * 0.5,
            point.y - self.viewport.height * 0.5,
        );
    }

    /// The region of the world currently visible through this camera
    pub fn world_view(&self) -> Rect {
        Rect::new(self.scroll.x, self.scroll.y, self.viewport.width, self.viewport.height)
    }

    /// Convert a stage point inside the viewport to world space
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x - self.viewport.x + self.scroll.x,
            point.y - self.viewport.y + self.scroll.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_on_centres_point() {
        let mut camera = Camera::new(CameraId(0), 0.0, 0.0, 200.0, 100.0);
        camera.focus_on(Vec2::new(500.0, 300.0));
        assert_eq!(camera.scroll, Vec2::new(400.0, 250.0));
        assert!(camera.world_view().contains(Vec2::new(500.0, 300.0)));
    }

    #[test]
    fn test_screen_to_world() {
        let mut camera = Camera::new(CameraId(0), 10.0, 20.0, 100.0, 100.0);
        camera.scroll = Vec2::new(50.0, 60.0);
        assert_eq!(camera.screen_to_world(Vec2::new(10.0, 20.0)), Vec2::new(50.0, 60.0));
    }
}
