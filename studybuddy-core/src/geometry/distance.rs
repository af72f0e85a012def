use geo::{Distance, HaversineMeasure, Point};
use itertools::Itertools;

/// Mean Earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters (haversine)
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    point_distance(Point::new(lng1, lat1), Point::new(lng2, lat2))
}

pub fn point_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_METERS).distance(a, b)
}

/// Sum of the distances between consecutive points
pub fn path_length(points: &[Point<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| point_distance(*a, *b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_points_have_zero_distance() {
        assert_eq!(distance(28.0305, -26.1929, 28.0305, -26.1929), 0.0);
        assert_eq!(distance(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = distance(28.0300, -26.1920, 28.0342, -26.1887);
        let ba = distance(28.0342, -26.1887, 28.0300, -26.1920);
        assert_relative_eq!(ab, ba);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // 6371 km * pi / 180
        let d = distance(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(d, 111_194.93, epsilon = 0.01);
    }

    #[test]
    fn test_half_circumference_uses_campus_radius() {
        // half the equator at a 6371 km radius
        let d = distance(0.0, 0.0, 180.0, 0.0);
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_METERS, epsilon = 1e-3);
    }

    #[test]
    fn test_short_campus_hop() {
        // 0.001 degrees of longitude at -26.192 is roughly 100 m
        let d = distance(28.0300, -26.1920, 28.0310, -26.1920);
        assert!((d - 99.8).abs() < 0.5, "got {d}");
    }

    #[test]
    fn test_path_length_sums_legs() {
        let a = Point::new(28.0300, -26.1920);
        let b = Point::new(28.0310, -26.1920);
        let c = Point::new(28.0310, -26.1930);

        let total = path_length(&[a, b, c]);
        assert_relative_eq!(total, point_distance(a, b) + point_distance(b, c));
        assert_eq!(path_length(&[a]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
