//! Tween manager

use slotmap::SlotMap;
use thiserror::Error;

use crate::world::{ObjectId, World};

use super::Tween;

slotmap::new_key_type! {
    /// Handle to a registered tween
    pub struct TweenHandle;
}

/// Errors raised when creating tweens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TweenError {
    /// The target object is not alive in the world
    #[error("Tween target {0:?} does not exist")]
    UnknownTarget(ObjectId),
}

/// Owns every registered tween
#[derive(Debug, Default)]
pub struct TweenManager {
    tweens: SlotMap<TweenHandle, Tween>,
}

impl TweenManager {
    /// Create an empty tween manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a tween for a world object
    ///
    /// With `local_reference` the object's tween slot is overwritten with the
    /// new handle.
    pub fn create(
        &mut self,
        world: &mut World,
        target: ObjectId,
        local_reference: bool,
    ) -> Result<TweenHandle, TweenError> {
        if !world.contains(target) {
            return Err(TweenError::UnknownTarget(target));
        }

        let handle = self.add(Tween::new(target));
        if local_reference {
            world.set_tween(target, handle);
        }
        Ok(handle)
    }

    /// Register an existing tween
    pub fn add(&mut self, tween: Tween) -> TweenHandle {
        let target = tween.target();
        let handle = self.tweens.insert(tween);
        log::debug!("Registered tween {:?} on {:?}", handle, target);
        handle
    }

    /// Look up a tween
    pub fn get(&self, handle: TweenHandle) -> Option<&Tween> {
        self.tweens.get(handle)
    }

    /// Look up a tween mutably
    pub fn get_mut(&mut self, handle: TweenHandle) -> Option<&mut Tween> {
        self.tweens.get_mut(handle)
    }

    /// Unregister a tween
    pub fn remove(&mut self, handle: TweenHandle) -> Option<Tween> {
        self.tweens.remove(handle)
    }

    /// Unregister every tween targeting `target`; returns how many were removed
    pub fn remove_all_for(&mut self, target: ObjectId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, tween| tween.target() != target);
        before - self.tweens.len()
    }

    /// Tweens targeting `target`
    pub fn tweens_for(&self, target: ObjectId) -> impl Iterator<Item = (TweenHandle, &Tween)> {
        self.tweens.iter().filter(move |(_, tween)| tween.target() == target)
    }

    /// Number of registered tweens
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether no tweens are registered
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageConfig;
    use crate::objects::Sprite;

    #[test]
    fn test_create_without_local_reference() {
        let mut world = World::new(&StageConfig::default());
        let mut tweens = TweenManager::new();
        let sprite = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();

        let handle = tweens.create(&mut world, sprite.key(), false).unwrap();
        assert_eq!(tweens.get(handle).unwrap().target(), sprite.key());
        assert!(world.tween_of(sprite.key()).is_none());
    }

    #[test]
    fn test_local_reference_overwrites_slot() {
        let mut world = World::new(&StageConfig::default());
        let mut tweens = TweenManager::new();
        let sprite = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();

        let first = tweens.create(&mut world, sprite.key(), true).unwrap();
        assert_eq!(world.tween_of(sprite.key()), Some(first));

        let second = tweens.create(&mut world, sprite.key(), true).unwrap();
        assert_eq!(world.tween_of(sprite.key()), Some(second));
        assert_eq!(tweens.len(), 2);
    }

    #[test]
    fn test_unknown_target() {
        let mut world = World::new(&StageConfig::default());
        let mut tweens = TweenManager::new();
        let sprite = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        world.remove(sprite.key()).unwrap();

        let err = tweens.create(&mut world, sprite.key(), false).unwrap_err();
        assert_eq!(err, TweenError::UnknownTarget(sprite.key()));
        assert!(tweens.is_empty());
    }

    #[test]
    fn test_remove_all_for() {
        let mut world = World::new(&StageConfig::default());
        let mut tweens = TweenManager::new();
        let a = world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        let b = world.add(Sprite::new(0.0, 0.0, "b")).unwrap();
        tweens.add(Tween::new(a.key()));
        tweens.add(Tween::new(a.key()));
        tweens.add(Tween::new(b.key()));

        assert_eq!(tweens.remove_all_for(a.key()), 2);
        assert_eq!(tweens.len(), 1);
        assert_eq!(tweens.tweens_for(b.key()).count(), 1);
    }
}
