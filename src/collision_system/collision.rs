use super::IndexPairs;
use crate::error::CollisionError;
use crate::geo::*;
use std::fmt;
use tracing::{debug, warn};

/// a colliding pair, `i < j` are the positions of `a` and `b` in the input
#[derive(Debug, PartialEq)]
pub struct Collision<'a, C> {
    pub i: usize,
    pub j: usize,
    pub a: &'a C,
    pub b: &'a C,
}

impl<'a, C> Clone for Collision<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for Collision<'a, C> {}

impl<'a, C> Collision<'a, C> {
    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    pub fn pair(&self) -> (&'a C, &'a C) {
        (self.a, self.b)
    }
}

impl<'a, C: fmt::Display> fmt::Display for Collision<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// checks that every object yields a bounding box made of four finite
/// numbers, stopping at the first one that does not
///
/// Inverted boxes are let through. Whether they make sense is up to the
/// caller, they only get logged.
pub fn validate<C: Collider>(objects: &[C]) -> Result<(), CollisionError> {
    for (index, object) in objects.iter().enumerate() {
        let bb = object.bounding_box();
        if !bb.is_finite() {
            return Err(CollisionError::ContractViolation {
                index,
                item: object.describe(),
                reason: "bounding box has non finite coordinates".to_string(),
            });
        }
        if bb.is_inverted() {
            warn!(index, bounding_box = %bb, "inverted bounding box, overlap results are unspecified");
        }
    }
    Ok(())
}

/// all pairs of `objects` whose bounding boxes overlap
///
/// Every object is validated before anything is compared, one bad object
/// fails the whole call. Candidates are generated as (i, j) with i < j in
/// lexicographic order and the result keeps that order. Objects are matched
/// by position, equal objects at different positions still form a pair.
pub fn find_collisions<C: Collider>(
    objects: &[C],
) -> Result<Vec<Collision<'_, C>>, CollisionError> {
    validate(objects)?;
    let candidates = IndexPairs::new(objects.len());
    let candidate_count = candidates.len();
    let collisions: Vec<Collision<'_, C>> = candidates
        .filter(|&(i, j)| overlaps(&objects[i].bounding_box(), &objects[j].bounding_box()))
        .map(|(i, j)| Collision {
            i,
            j,
            a: &objects[i],
            b: &objects[j],
        })
        .collect();
    debug!(
        objects = objects.len(),
        candidates = candidate_count,
        collisions = collisions.len(),
        "collision scan finished"
    );
    Ok(collisions)
}
