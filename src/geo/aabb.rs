use super::*;

/// axis aligned box spanned by the corners (x1, y1) and (x2, y2)
///
/// The corners are taken as given. `overlaps` only gives meaningful answers
/// when x1 <= x2 and y1 <= y2, keeping it that way is up to whoever builds the
/// box. Use `normalized` to reorder the corners explicitly.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AABB {
    pub x1: Float,
    pub y1: Float,
    pub x2: Float,
    pub y2: Float,
}

/// strict separating axis test: boxes that only share an edge or a corner do
/// not overlap
pub fn overlaps(a: &AABB, b: &AABB) -> bool {
    a.x1 < b.x2 && a.x2 > b.x1 && a.y1 < b.y2 && a.y2 > b.y1
}

impl AABB {
    pub fn new(x1: Float, y1: Float, x2: Float, y2: Float) -> AABB {
        AABB { x1, y1, x2, y2 }
    }

    pub fn from_corners(a: P2, b: P2) -> AABB {
        AABB::new(a.x, a.y, b.x, b.y)
    }

    pub fn width(&self) -> Float {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Float {
        self.y2 - self.y1
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// x1 > x2 or y1 > y2
    pub fn is_inverted(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// the same box with the corners swapped so that x1 <= x2 and y1 <= y2
    pub fn normalized(&self) -> AABB {
        AABB {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn overlaps(&self, other: &AABB) -> bool {
        overlaps(self, other)
    }
}

impl Intersect<AABB> for AABB {
    // the overlapping region
    type Intersection = AABB;

    fn intersect(&self, other: &AABB) -> Option<AABB> {
        if overlaps(self, other) {
            Some(AABB {
                x1: self.x1.max(other.x1),
                y1: self.y1.max(other.y1),
                x2: self.x2.min(other.x2),
                y2: self.y2.min(other.y2),
            })
        } else {
            None
        }
    }

    fn does_collide(&self, other: &AABB) -> bool {
        overlaps(self, other)
    }
}

impl Collider for AABB {
    fn bounding_box(&self) -> AABB {
        *self
    }
}

impl HasGeometry for AABB {
    fn get_geometry(&self) -> Geo {
        Geo::GeoAABB(*self)
    }
}

impl fmt::Display for AABB {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "AABB(x1={}, y1={}, x2={}, y2={})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Distribution<AABB> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AABB {
        let a: P2 = rng.gen();
        let b: P2 = rng.gen();
        AABB::from_corners(a, b).normalized()
    }
}
