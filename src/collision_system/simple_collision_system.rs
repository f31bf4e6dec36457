use super::collision::{find_collisions, Collision};
use crate::error::CollisionError;
use crate::geo::*;

/// collects shapes and answers which of them overlap, by brute force
pub struct SimpleCollisionSystem<C> {
    shapes: Vec<C>,
}

impl<C: Collider> SimpleCollisionSystem<C> {
    pub fn new() -> SimpleCollisionSystem<C> {
        SimpleCollisionSystem { shapes: Vec::new() }
    }

    pub fn insert(&mut self, shape: C) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[C] {
        &self.shapes
    }

    /// number of pairs a call to `find_collisions` will test
    pub fn candidate_count(&self) -> usize {
        pair_count(self.shapes.len())
    }

    pub fn find_collisions(&self) -> Result<Vec<Collision<'_, C>>, CollisionError> {
        find_collisions(&self.shapes)
    }
}

impl<C: Collider> Default for SimpleCollisionSystem<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Collider> From<Vec<C>> for SimpleCollisionSystem<C> {
    fn from(shapes: Vec<C>) -> Self {
        SimpleCollisionSystem { shapes }
    }
}

impl<C: Collider> Extend<C> for SimpleCollisionSystem<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}
