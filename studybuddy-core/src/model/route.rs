use geo::{LineString, Point};

use crate::geometry::path_length;

/// Walking route between two venues
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Ordered coordinates from the start venue to the end venue
    pub points: Vec<Point<f64>>,
    /// Sum of haversine distances between consecutive points
    pub total_distance_meters: f64,
}

impl Route {
    pub fn from_points(points: Vec<Point<f64>>) -> Self {
        let total_distance_meters = path_length(&points);
        Self {
            points,
            total_distance_meters,
        }
    }

    /// Estimated walking time rounded up to whole seconds.
    ///
    /// `None` when `speed_mps` is not a positive finite number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn walking_time_seconds(&self, speed_mps: f64) -> Option<u64> {
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return None;
        }
        Some((self.total_distance_meters / speed_mps).ceil() as u64)
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point_distance;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_distance_matches_legs() {
        let a = Point::new(28.0300, -26.1920);
        let b = Point::new(28.0305, -26.1929);
        let c = Point::new(28.0310, -26.1920);

        let route = Route::from_points(vec![a, b, c]);
        assert_relative_eq!(
            route.total_distance_meters,
            point_distance(a, b) + point_distance(b, c)
        );
        assert_eq!(route.to_line_string().0.len(), 3);
    }

    #[test]
    fn test_walking_time() {
        let route = Route {
            points: Vec::new(),
            total_distance_meters: 141.0,
        };
        assert_eq!(route.walking_time_seconds(1.4), Some(101));
        assert_eq!(route.walking_time_seconds(0.0), None);
        assert_eq!(route.walking_time_seconds(f64::NAN), None);
    }
}
