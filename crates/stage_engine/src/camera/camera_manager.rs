//! Camera manager

use crate::core::StageConfig;

use super::{Camera, CameraId};

/// Owns the world's cameras in creation order
#[derive(Debug)]
pub struct CameraManager {
    cameras: Vec<Camera>,
    next_id: u32,
    default_camera: Option<CameraId>,
}

impl CameraManager {
    /// Create a manager, with a stage-sized camera if the stage asks for one
    pub fn new(stage: &StageConfig) -> Self {
        let mut manager = Self {
            cameras: Vec::new(),
            next_id: 0,
            default_camera: None,
        };

        if stage.default_camera {
            let id = manager.add_camera(0.0, 0.0, stage.width, stage.height);
            manager.default_camera = Some(id);
        }

        manager
    }

    fn next_id(&mut self) -> CameraId {
        let id = CameraId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Create a camera with a specific position and size
    pub fn add_camera(&mut self, x: f32, y: f32, width: f32, height: f32) -> CameraId {
        let id = self.next_id();
        self.cameras.push(Camera::new(id, x, y, width, height));
        log::debug!("Added camera {:?} at ({}, {}) size {}x{}", id, x, y, width, height);
        id
    }

    /// The camera created from the stage configuration, if still present
    pub fn default_camera(&self) -> Option<CameraId> {
        self.default_camera
    }

    /// Look up a camera
    pub fn get(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.iter().find(|camera| camera.id() == id)
    }

    /// Look up a camera mutably
    pub fn get_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.iter_mut().find(|camera| camera.id() == id)
    }

    /// Remove a camera; returns whether it existed
    pub fn remove_camera(&mut self, id: CameraId) -> bool {
        let before = self.cameras.len();
        self.cameras.retain(|camera| camera.id() != id);
        if self.default_camera == Some(id) {
            self.default_camera = None;
        }
        before != self.cameras.len()
    }

    /// Number of cameras
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether there are no cameras
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Cameras in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Camera> {
        self.cameras.iter()
    }
}
