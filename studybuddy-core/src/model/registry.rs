//! Lookups over an injected venue list.
//!
//! All of these are linear scans; campus venue lists are small.

use geo::{Point, Rect};

use super::Venue;
use crate::geometry::point_distance;

pub fn find_venue_by_id<'a>(venues: &'a [Venue], id: &str) -> Option<&'a Venue> {
    venues.iter().find(|venue| venue.id == id)
}

/// First venue whose name contains `query`, ignoring case
pub fn find_venue_by_name<'a>(venues: &'a [Venue], query: &str) -> Option<&'a Venue> {
    let query = query.to_lowercase();
    venues
        .iter()
        .find(|venue| venue.name.to_lowercase().contains(&query))
}

/// Venues inside `bounds`, edges included
pub fn get_venues_in_bounding_box<'a>(venues: &'a [Venue], bounds: Rect<f64>) -> Vec<&'a Venue> {
    let (min, max) = (bounds.min(), bounds.max());
    venues
        .iter()
        .filter(|venue| {
            let (lng, lat) = venue.coordinates.x_y();
            lng >= min.x && lng <= max.x && lat >= min.y && lat <= max.y
        })
        .collect()
}

/// Venues paired with their distance from `reference`, nearest first.
///
/// Equal distances keep their input order.
pub fn sort_venues_by_distance(venues: &[Venue], reference: Point<f64>) -> Vec<(&Venue, f64)> {
    let mut ranked: Vec<_> = venues
        .iter()
        .map(|venue| (venue, point_distance(reference, venue.coordinates)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}
