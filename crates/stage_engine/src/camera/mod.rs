//! Camera system
//!
//! Cameras are 2D viewports onto the world. The [`CameraManager`] owns them
//! in creation order; that order is the order they are drawn in.

mod camera2d;
mod camera_manager;

pub use camera2d::{Camera, CameraId};
pub use camera_manager::CameraManager;
