//! Broad-phase collision detection for 2D shapes.
//!
//! Every shape is reduced to its axis aligned bounding box and all pairs of
//! boxes are tested against each other.
//!
//! ```
//! use shape_collider::collision_system::find_collisions;
//! use shape_collider::geo::*;
//!
//! let shapes = vec![
//!     Geo::GeoSquare(Square::new(0., 0., 10.)),
//!     Geo::GeoRect(Rect::new(5., 5., 20., 20.)),
//! ];
//! let collisions = find_collisions(&shapes).unwrap();
//! assert_eq!(collisions[0].indices(), (0, 1));
//! ```

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod collision_system;
pub mod error;
pub mod geo;
pub mod utils;

pub use collision_system::{find_collisions, Collision, SimpleCollisionSystem};
pub use error::CollisionError;
pub use geo::{Collider, Geo, AABB};
