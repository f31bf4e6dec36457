use super::*;

/// the capability every shape needs to take part in broad-phase collision
/// detection: it can produce its axis aligned bounding box on request
pub trait Collider {
    fn bounding_box(&self) -> AABB;

    /// text naming the collider in error messages
    fn describe(&self) -> String {
        self.bounding_box().to_string()
    }
}

impl<T: Collider + ?Sized> Collider for &T {
    fn bounding_box(&self) -> AABB {
        (**self).bounding_box()
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Collider + ?Sized> Collider for Box<T> {
    fn bounding_box(&self) -> AABB {
        (**self).bounding_box()
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub trait Intersect<T> {
    type Intersection;

    fn intersect(&self, other: &T) -> Option<Self::Intersection>;

    fn does_collide(&self, other: &T) -> bool {
        self.intersect(other).is_some()
    }
}

pub trait HasGeometry {
    fn get_geometry(&self) -> Geo;
}
