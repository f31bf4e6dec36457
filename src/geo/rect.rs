use super::*;

/// axis aligned rectangle with its lower left corner at `origin`
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub origin: P2,
    pub width: Float,
    pub height: Float,
}

impl Rect {
    pub fn new(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect {
            origin: P2::new(x, y),
            width,
            height,
        }
    }
}

impl Collider for Rect {
    fn bounding_box(&self) -> AABB {
        AABB::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl HasGeometry for Rect {
    fn get_geometry(&self) -> Geo {
        Geo::GeoRect(*self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Rect(x={}, y={}, width={}, height={})",
            self.origin.x, self.origin.y, self.width, self.height
        )
    }
}

impl Distribution<Rect> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rect {
        Rect {
            origin: rng.gen(),
            width: rng.gen(),
            height: rng.gen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    #[test]
    fn bounding_box() {
        assert_eq!(
            Rect::new(5., 5., 20., 20.).bounding_box(),
            AABB::new(5., 5., 25., 25.)
        );
        assert_eq!(
            Rect::new(-1., 2., 3., 0.5).bounding_box(),
            AABB::new(-1., 2., 2., 2.5)
        );
    }

    #[test]
    fn bounding_box_is_idempotent() {
        let r: Rect = rand::thread_rng().gen();
        assert_eq!(r.bounding_box(), r.bounding_box());
    }

    #[quickcheck]
    fn overlaps_identical_copy(x: Float, y: Float, width: Float, height: Float) -> TestResult {
        let b = Rect::new(x, y, width, height).bounding_box();
        if !(b.x2 > b.x1 && b.y2 > b.y1) {
            return TestResult::discard();
        }
        TestResult::from_bool(overlaps(&b, &Rect::new(x, y, width, height).bounding_box()))
    }
}
