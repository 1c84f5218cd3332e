//! Specialized collection types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use slotmap::{Key, SlotMap};

/// Typed handle for type-safe references into an untyped slot map
///
/// The key is shared by every object stored in the map; the type parameter
/// records which concrete type the handle was issued for.
pub struct TypedHandle<K: Key, T> {
    key: K,
    _phantom: PhantomData<fn() -> T>,
}

impl<K: Key, T> TypedHandle<K, T> {
    /// Create a new typed handle from a key
    pub fn new(key: K) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> K {
        self.key
    }
}

// Manual impls so that `T` does not need to satisfy the derived bounds.
impl<K: Key, T> Clone for TypedHandle<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Key, T> Copy for TypedHandle<K, T> {}

impl<K: Key, T> PartialEq for TypedHandle<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Key, T> Eq for TypedHandle<K, T> {}

impl<K: Key, T> Hash for TypedHandle<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: Key, T> fmt::Debug for TypedHandle<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedHandle").field(&self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    slotmap::new_key_type! { struct TestKey; }

    #[test]
    fn test_typed_handle_equality_follows_key() {
        let mut map: SlotMap<TestKey, u32> = SlotMap::with_key();
        let a = map.insert(1);
        let b = map.insert(2);

        let ha: TypedHandle<TestKey, String> = TypedHandle::new(a);
        let ha2 = ha;
        let hb: TypedHandle<TestKey, String> = TypedHandle::new(b);

        assert_eq!(ha, ha2);
        assert_ne!(ha, hb);
        assert_eq!(ha.key(), a);
    }
}
