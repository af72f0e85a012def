use geo::Point;

use crate::model::Venue;

/// Finite `[lng, lat]` within `[-180, 180] x [-90, 90]`
pub fn is_valid_coordinate(point: Point<f64>) -> bool {
    let (lng, lat) = point.x_y();
    lng.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lng)
        && (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_venue(venue: &Venue) -> bool {
    !venue.id.trim().is_empty()
        && !venue.name.trim().is_empty()
        && is_valid_coordinate(venue.coordinates)
}
