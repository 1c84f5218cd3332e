//! Scene world
//!
//! The world owns every live game object in a single arena. Objects are
//! organised into groups; the world's root group is the container that the
//! factory appends to.
//!
//! ```text
//! World
//!  ├── arena: SlotMap<ObjectId, Entry>
//!  ├── root: Group ── children ── Sprite / Button / Group / ScrollZone / Tilemap
//!  └── cameras: CameraManager
//! ```

mod object;
mod group;
mod scene;

pub use object::{GameObject, GameObjectKind, ObjectId, ObjectHandle};
pub use group::Group;
pub use scene::{World, WorldError};
