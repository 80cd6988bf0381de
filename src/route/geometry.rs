//! Planar segment tests used to decide which waypoints can see each other.

/// Map position in pixels, `[x, y]` as written in the mission file.
pub type Point = [f32; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the ordered triple `(p, q, r)`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q[1] - p[1]) * (r[0] - q[0]) - (q[0] - p[0]) * (r[1] - q[1]);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies inside the bounding box of `p` and `r`. Only meaningful
/// for collinear points.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q[0] <= p[0].max(r[0])
        && q[0] >= p[0].min(r[0])
        && q[1] <= p[1].max(r[1])
        && q[1] >= p[1].min(r[1])
}

/// Whether segments `p1q1` and `p2q2` touch, endpoints and overlaps included.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    use Orientation::Collinear;
    (o1 == Collinear && on_segment(p1, p2, q1))
        || (o2 == Collinear && on_segment(p1, q2, q1))
        || (o3 == Collinear && on_segment(p2, p1, q2))
        || (o4 == Collinear && on_segment(p2, q1, q2))
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    f64::from(b[0] - a[0]).hypot(f64::from(b[1] - a[1]))
}

/// Straight obstacle between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub a: Point,
    pub b: Point,
}

impl Wall {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Whether this wall cuts the straight line from `from` to `to`.
    #[inline]
    pub fn blocks(&self, from: Point, to: Point) -> bool {
        segments_intersect(from, to, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_of_triples() {
        assert_eq!(orientation([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]), Orientation::Collinear);
        assert_eq!(orientation([0.0, 0.0], [4.0, 4.0], [1.0, 2.0]), Orientation::CounterClockwise);
        assert_eq!(orientation([0.0, 0.0], [4.0, 4.0], [2.0, 1.0]), Orientation::Clockwise);
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect([0.0, 0.0], [4.0, 4.0], [0.0, 4.0], [4.0, 0.0]));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segments_intersect([0.0, 0.0], [4.0, 0.0], [0.0, 1.0], [4.0, 1.0]));
    }

    #[test]
    fn touching_endpoint_counts() {
        assert!(segments_intersect([0.0, 0.0], [2.0, 0.0], [2.0, 0.0], [2.0, 5.0]));
    }

    #[test]
    fn collinear_overlap_and_gap() {
        assert!(segments_intersect([0.0, 0.0], [3.0, 0.0], [2.0, 0.0], [5.0, 0.0]));
        assert!(!segments_intersect([0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [5.0, 0.0]));
    }

    #[test]
    fn wall_blocks_line_of_sight() {
        let wall = Wall::new([5.0, -1.0], [5.0, 1.0]);
        assert!(wall.blocks([0.0, 0.0], [10.0, 0.0]));
        assert!(!wall.blocks([0.0, 2.0], [10.0, 2.0]));
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((distance([0.0, 0.0], [3.0, 4.0]) - 5.0).abs() < 1e-12);
    }
}
