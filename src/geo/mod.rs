pub mod aabb;
pub mod circle;
pub mod rect;
pub mod square;
pub mod traits;

pub use crate::utils::*;
pub use aabb::*;
pub use circle::*;
pub use rand::distributions::{Distribution, Standard};
pub use rand::Rng;
pub use rect::*;
pub use square::*;
pub use traits::*;
use serde::*;
use std::fmt;

/// every shape the collision system knows about
///
/// Serialized externally tagged, e.g. `{"Square": {"origin": [0, 0], "size": 10}}`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Geo {
    #[serde(rename = "Square")]
    GeoSquare(Square),
    #[serde(rename = "Rect")]
    GeoRect(Rect),
    #[serde(rename = "Circle")]
    GeoCircle(Circle),
    #[serde(rename = "AABB")]
    GeoAABB(AABB),
}

impl Geo {
    pub fn does_collide(&self, other: &Geo) -> bool {
        overlaps(&self.bounding_box(), &other.bounding_box())
    }
}

impl Collider for Geo {
    fn bounding_box(&self) -> AABB {
        match self {
            Geo::GeoSquare(s) => s.bounding_box(),
            Geo::GeoRect(r) => r.bounding_box(),
            Geo::GeoCircle(c) => c.bounding_box(),
            Geo::GeoAABB(b) => b.bounding_box(),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Geo::GeoSquare(s) => fmt::Display::fmt(s, f),
            Geo::GeoRect(r) => fmt::Display::fmt(r, f),
            Geo::GeoCircle(c) => fmt::Display::fmt(c, f),
            Geo::GeoAABB(b) => fmt::Display::fmt(b, f),
        }
    }
}

impl Distribution<Geo> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Geo {
        match rng.gen_range(0..4) {
            0 => rng.gen::<Square>().get_geometry(),
            1 => rng.gen::<Rect>().get_geometry(),
            2 => rng.gen::<Circle>().get_geometry(),
            _ => rng.gen::<AABB>().get_geometry(),
        }
    }
}
