//! Game object enum and typed handles

use crate::foundation::collections::TypedHandle;
use crate::foundation::math::Vec2;
use crate::objects::{Button, ScrollZone, Sprite, Tilemap};

use super::Group;

slotmap::new_key_type! {
    /// Identifier of an object stored in the world
    pub struct ObjectId;
}

/// Handle to a world object of a known concrete type
pub type ObjectHandle<T> = TypedHandle<ObjectId, T>;

/// Every kind of object the world can hold
#[derive(Debug)]
pub enum GameObject {
    /// Textured sprite
    Sprite(Sprite),
    /// Interactive button
    Button(Button),
    /// Container of other objects
    Group(Group),
    /// Scrolling texture region
    ScrollZone(ScrollZone),
    /// Tile map
    Tilemap(Tilemap),
}

impl GameObject {
    /// Short name of the variant, used in logs and errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Sprite(_) => Sprite::KIND,
            Self::Button(_) => Button::KIND,
            Self::Group(_) => Group::KIND,
            Self::ScrollZone(_) => ScrollZone::KIND,
            Self::Tilemap(_) => Tilemap::KIND,
        }
    }

    /// World position of the object, if it has one
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::Sprite(sprite) => Some(sprite.position),
            Self::Button(button) => Some(button.sprite.position),
            Self::ScrollZone(zone) => Some(zone.position),
            Self::Tilemap(map) => Some(map.position),
            Self::Group(_) => None,
        }
    }

    /// Borrow as a group
    pub fn as_group(&self) -> Option<&Group> {
        Group::from_object(self)
    }
}

/// Conversion between a concrete object type and [`GameObject`]
///
/// Lets the world hand out [`ObjectHandle<T>`] and resolve it back to `&T`.
pub trait GameObjectKind: Sized {
    /// Variant name
    const KIND: &'static str;

    /// Wrap into the enum
    fn into_object(self) -> GameObject;

    /// Borrow from the enum if the variant matches
    fn from_object(object: &GameObject) -> Option<&Self>;

    /// Mutably borrow from the enum if the variant matches
    fn from_object_mut(object: &mut GameObject) -> Option<&mut Self>;
}

macro_rules! impl_game_object_kind {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl GameObjectKind for $ty {
            const KIND: &'static str = $name;

            fn into_object(self) -> GameObject {
                GameObject::$variant(self)
            }

            fn from_object(object: &GameObject) -> Option<&Self> {
                match object {
                    GameObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_object_mut(object: &mut GameObject) -> Option<&mut Self> {
                match object {
                    GameObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_game_object_kind!(Sprite, Sprite, "sprite");
impl_game_object_kind!(Button, Button, "button");
impl_game_object_kind!(Group, Group, "group");
impl_game_object_kind!(ScrollZone, ScrollZone, "scroll_zone");
impl_game_object_kind!(Tilemap, Tilemap, "tilemap");
