use super::*;

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Circle {
    // center
    pub origin: P2,
    pub radius: Float,
}

impl Circle {
    pub fn new(x: Float, y: Float, radius: Float) -> Circle {
        Circle {
            origin: P2::new(x, y),
            radius,
        }
    }
}

impl Collider for Circle {
    fn bounding_box(&self) -> AABB {
        let r = V2::new(self.radius, self.radius);
        AABB::from_corners(self.origin - r, self.origin + r)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl HasGeometry for Circle {
    fn get_geometry(&self) -> Geo {
        Geo::GeoCircle(*self)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Circle(x={}, y={}, radius={})",
            self.origin.x, self.origin.y, self.radius
        )
    }
}

impl Distribution<Circle> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Circle {
        Circle {
            origin: rng.gen(),
            radius: rng.gen(),
        }
    }
}
