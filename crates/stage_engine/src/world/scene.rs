//! World container implementation

use slotmap::SlotMap;
use thiserror::Error;

use crate::camera::CameraManager;
use crate::core::StageConfig;
use crate::foundation::math::Rect;
use crate::tween::TweenHandle;

use super::{GameObject, GameObjectKind, Group, ObjectHandle, ObjectId};

/// Errors raised by world insertion and removal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The target group has reached its capacity
    #[error("Group {group:?} is full (capacity {capacity})")]
    GroupFull {
        /// Group that rejected the object
        group: ObjectId,
        /// Its `max_size`
        capacity: usize,
    },

    /// No object with this id is alive
    #[error("Object {0:?} does not exist")]
    UnknownObject(ObjectId),

    /// The id refers to an object that cannot hold children
    #[error("Object {id:?} is a {kind}, not a group")]
    NotAGroup {
        /// Offending object
        id: ObjectId,
        /// What it actually is
        kind: &'static str,
    },

    /// The root group lives as long as the world
    #[error("The root group cannot be removed")]
    RootRemoval,
}

/// Arena slot: the object plus the bookkeeping every object carries
#[derive(Debug)]
struct Entry {
    object: GameObject,
    parent: Option<ObjectId>,
    tween: Option<TweenHandle>,
}

/// Scene world containing all live game objects
///
/// Every object except the root group has exactly one parent group, and its
/// id appears exactly once in that group's child list.
#[derive(Debug)]
pub struct World {
    objects: SlotMap<ObjectId, Entry>,
    root: ObjectId,
    bounds: Rect,
    /// Cameras looking into this world
    pub cameras: CameraManager,
}

impl World {
    /// Create a world sized to the stage
    pub fn new(stage: &StageConfig) -> Self {
        let mut objects = SlotMap::with_key();
        let root = objects.insert(Entry {
            object: GameObject::Group(Group::new(0)),
            parent: None,
            tween: None,
        });

        log::info!("Creating world {}x{}", stage.width, stage.height);

        Self {
            objects,
            root,
            bounds: Rect::new(0.0, 0.0, stage.width, stage.height),
            cameras: CameraManager::new(stage),
        }
    }

    /// The root group every factory insertion lands in
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// World bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize the world, keeping its origin
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        log::debug!("World bounds resized to {}x{}", width, height);
        self.bounds.width = width;
        self.bounds.height = height;
    }

    /// Insert an object into the root group
    pub fn add<T: GameObjectKind>(&mut self, object: T) -> Result<ObjectHandle<T>, WorldError> {
        self.add_to_group(self.root, object)
    }

    /// Insert an object into a specific group
    ///
    /// On failure the object is dropped and the world is unchanged.
    pub fn add_to_group<T: GameObjectKind>(
        &mut self,
        group: ObjectId,
        object: T,
    ) -> Result<ObjectHandle<T>, WorldError> {
        let target = self.group(group)?;
        if target.is_full() {
            log::warn!("Rejected {}: group {:?} is full", T::KIND, group);
            return Err(WorldError::GroupFull {
                group,
                capacity: target.max_size(),
            });
        }

        let id = self.objects.insert(Entry {
            object: object.into_object(),
            parent: Some(group),
            tween: None,
        });
        self.group_mut(group)?.push(id);

        log::debug!("Added {} {:?} to group {:?}", T::KIND, id, group);
        Ok(ObjectHandle::new(id))
    }

    /// Borrow a group by id
    pub fn group(&self, id: ObjectId) -> Result<&Group, WorldError> {
        let entry = self.objects.get(id).ok_or(WorldError::UnknownObject(id))?;
        match &entry.object {
            GameObject::Group(group) => Ok(group),
            other => Err(WorldError::NotAGroup { id, kind: other.kind_name() }),
        }
    }

    fn group_mut(&mut self, id: ObjectId) -> Result<&mut Group, WorldError> {
        let entry = self.objects.get_mut(id).ok_or(WorldError::UnknownObject(id))?;
        match &mut entry.object {
            GameObject::Group(group) => Ok(group),
            other => Err(WorldError::NotAGroup { id, kind: other.kind_name() }),
        }
    }

    /// Resolve a typed handle
    pub fn get<T: GameObjectKind>(&self, handle: ObjectHandle<T>) -> Option<&T> {
        self.objects.get(handle.key()).and_then(|entry| T::from_object(&entry.object))
    }

    /// Resolve a typed handle mutably
    pub fn get_mut<T: GameObjectKind>(&mut self, handle: ObjectHandle<T>) -> Option<&mut T> {
        self.objects.get_mut(handle.key()).and_then(|entry| T::from_object_mut(&mut entry.object))
    }

    /// Borrow any object by id
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id).map(|entry| &entry.object)
    }

    /// Mutably borrow any object by id
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id).map(|entry| &mut entry.object)
    }

    /// Whether an object with this id is alive
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Parent group of an object (`None` for the root or unknown ids)
    pub fn parent_of(&self, id: ObjectId) -> Option<ObjectId> {
        self.objects.get(id).and_then(|entry| entry.parent)
    }

    /// Tween stored on the object by a local-reference tween
    pub fn tween_of(&self, id: ObjectId) -> Option<TweenHandle> {
        self.objects.get(id).and_then(|entry| entry.tween)
    }

    /// Overwrite the object's tween slot; returns false if the object is gone
    pub(crate) fn set_tween(&mut self, id: ObjectId, tween: TweenHandle) -> bool {
        match self.objects.get_mut(id) {
            Some(entry) => {
                entry.tween = Some(tween);
                true
            }
            None => false,
        }
    }

    /// Number of objects, not counting the root group
    pub fn len(&self) -> usize {
        self.objects.len() - 1
    }

    /// Whether the world holds no objects besides the root group
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every object except the root group (arena order)
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        let root = self.root;
        self.objects
            .iter()
            .filter(move |(id, _)| *id != root)
            .map(|(id, entry)| (id, &entry.object))
    }

    /// Remove an object and, for groups, everything beneath it
    ///
    /// Returns the ids of all removed objects, `id` first.
    pub fn remove(&mut self, id: ObjectId) -> Result<Vec<ObjectId>, WorldError> {
        if id == self.root {
            return Err(WorldError::RootRemoval);
        }

        let parent = self.parent_of(id);
        if !self.contains(id) {
            return Err(WorldError::UnknownObject(id));
        }
        if let Some(parent) = parent {
            if let Ok(group) = self.group_mut(parent) {
                group.detach(id);
            }
        }

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(entry) = self.objects.remove(next) {
                if let GameObject::Group(group) = &entry.object {
                    pending.extend(group.children().iter().rev().copied());
                }
                removed.push(next);
            }
        }

        log::debug!("Removed {} object(s) starting at {:?}", removed.len(), id);
        Ok(removed)
    }

    /// Remove every object, leaving an empty root group
    pub fn clear(&mut self) {
        let root = self.root;
        self.objects.retain(|id, _| id == root);
        if let Ok(group) = self.group_mut(root) {
            *group = Group::new(0);
        }
        log::debug!("World cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Sprite;

    fn world() -> World {
        World::new(&StageConfig::default())
    }

    #[test]
    fn test_new_world_matches_stage() {
        let world = world();
        assert!(world.is_empty());
        assert_eq!(world.bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(world.group(world.root()).unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_to_root_once() {
        let mut world = world();
        let handle = world.add(Sprite::new(3.0, 4.0, "ship")).unwrap();

        let root = world.group(world.root()).unwrap();
        assert_eq!(root.children(), &[handle.key()]);
        assert_eq!(world.parent_of(handle.key()), Some(world.root()));
        assert_eq!(world.get(handle).unwrap().key, "ship");
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_full_group_rejects_without_leaking() {
        let mut world = world();
        let group = world.add(Group::new(1)).unwrap();
        world.add_to_group(group.key(), Sprite::new(0.0, 0.0, "a")).unwrap();

        let err = world.add_to_group(group.key(), Sprite::new(0.0, 0.0, "b")).unwrap_err();
        assert_eq!(err, WorldError::GroupFull { group: group.key(), capacity: 1 });
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_add_to_non_group_fails() {
        let mut world = world();
        let sprite = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        let err = world.add_to_group(sprite.key(), Sprite::new(0.0, 0.0, "b")).unwrap_err();
        assert!(matches!(err, WorldError::NotAGroup { kind: "sprite", .. }));
    }

    #[test]
    fn test_remove_group_removes_children() {
        let mut world = world();
        let group = world.add(Group::new(0)).unwrap();
        let a = world.add_to_group(group.key(), Sprite::new(0.0, 0.0, "a")).unwrap();
        let b = world.add_to_group(group.key(), Sprite::new(0.0, 0.0, "b")).unwrap();
        let other = world.add(Sprite::new(0.0, 0.0, "c")).unwrap();

        let removed = world.remove(group.key()).unwrap();
        assert_eq!(removed, vec![group.key(), a.key(), b.key()]);
        assert!(world.get(a).is_none());
        assert_eq!(world.group(world.root()).unwrap().children(), &[other.key()]);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_remove_root_and_unknown() {
        let mut world = world();
        let root = world.root();
        assert_eq!(world.remove(root), Err(WorldError::RootRemoval));

        let sprite = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        world.remove(sprite.key()).unwrap();
        assert_eq!(world.remove(sprite.key()), Err(WorldError::UnknownObject(sprite.key())));
    }

    #[test]
    fn test_clear() {
        let mut world = world();
        world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        world.add(Group::new(4)).unwrap();
        world.clear();
        assert!(world.is_empty());
        assert!(world.group(world.root()).unwrap().is_empty());
    }
}
