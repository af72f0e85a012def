use geo::{Coord, Point};

/// Orthogonal projection of `point` onto the segment, clamped to its endpoints.
///
/// Works in planar lng/lat space. A zero-length segment yields `seg_start`.
pub fn closest_point_on_segment(
    point: Point<f64>,
    seg_start: Point<f64>,
    seg_end: Point<f64>,
) -> Point<f64> {
    let a: Coord<f64> = seg_start.into();
    let ab = Coord::from(seg_end) - a;
    let ap = Coord::from(point) - a;

    let length_sq = ab.x * ab.x + ab.y * ab.y;
    if length_sq == 0.0 {
        return seg_start;
    }

    let t = (ap.x * ab.x + ap.y * ab.y) / length_sq;
    if t <= 0.0 {
        seg_start
    } else if t >= 1.0 {
        seg_end
    } else {
        Point::from(a + ab * t)
    }
}

/// Intersection of segments `p1-p2` and `p3-p4`.
///
/// Returns `None` for parallel or collinear segments and when the crossing
/// of the supporting lines falls outside either segment.
pub fn line_intersection(
    p1: Point<f64>,
    p2: Point<f64>,
    p3: Point<f64>,
    p4: Point<f64>,
) -> Option<Point<f64>> {
    let (x1, y1) = p1.x_y();
    let (x2, y2) = p2.x_y();
    let (x3, y3) = p3.x_y();
    let (x4, y4) = p4.x_y();

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}
