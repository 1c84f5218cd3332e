//! Object container

use super::ObjectId;

/// A container of world objects
///
/// Membership is managed by the [`World`](super::World); a freshly built
/// group is always empty. A `max_size` of zero means unbounded.
#[derive(Debug, Clone)]
pub struct Group {
    children: Vec<ObjectId>,
    max_size: usize,
    /// Whether the group and its children are drawn
    pub visible: bool,
}

impl Group {
    /// Create an empty group with the given capacity (0 = unbounded)
    pub fn new(max_size: usize) -> Self {
        Self {
            children: Vec::new(),
            max_size,
            visible: true,
        }
    }

    /// Capacity of this group (0 = unbounded)
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether another child can be inserted
    pub fn is_full(&self) -> bool {
        self.max_size > 0 && self.children.len() >= self.max_size
    }

    /// Direct children in insertion order
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    /// Whether `id` is a direct child
    pub fn contains(&self, id: ObjectId) -> bool {
        self.children.contains(&id)
    }

    pub(super) fn push(&mut self, id: ObjectId) {
        self.children.push(id);
    }

    pub(super) fn detach(&mut self, id: ObjectId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        before != self.children.len()
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new(0)
    }
}
