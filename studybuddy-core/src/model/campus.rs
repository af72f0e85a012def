use geo::{Point, Rect};
use hashbrown::HashMap;
use log::warn;

use super::{Pathway, Route, Venue, registry};
use crate::Error;
use crate::routing::{
    ViaCampusCenter, plan_route_with_fallback, venue_distance_matrix_with_fallback,
};

/// Venue and pathway registry for one campus
///
/// Immutable once built; share it behind an `Arc` when serving requests.
#[derive(Debug, Clone)]
pub struct CampusMap {
    venues: Vec<Venue>,
    pathways: Vec<Pathway>,
    venue_index: HashMap<String, usize>,
    center: Point<f64>,
}

impl CampusMap {
    /// Creates a map and indexes venues by id.
    ///
    /// Later venues repeating an earlier id are dropped.
    pub fn new(venues: Vec<Venue>, pathways: Vec<Pathway>, center: Point<f64>) -> Self {
        let mut venue_index = HashMap::with_capacity(venues.len());
        let mut unique = Vec::with_capacity(venues.len());
        for venue in venues {
            if venue_index.contains_key(&venue.id) {
                warn!("Duplicate venue id '{}', keeping the first entry", venue.id);
                continue;
            }
            venue_index.insert(venue.id.clone(), unique.len());
            unique.push(venue);
        }
        let venues = unique;

        Self {
            venues,
            pathways,
            venue_index,
            center,
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn pathways(&self) -> &[Pathway] {
        &self.pathways
    }

    /// Connector point used when two pathways do not cross
    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    pub fn pathway_count(&self) -> usize {
        self.pathways.len()
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venue_index.get(id).map(|&idx| &self.venues[idx])
    }

    pub fn find_venue_by_name(&self, query: &str) -> Option<&Venue> {
        registry::find_venue_by_name(&self.venues, query)
    }

    pub fn venues_within(&self, bounds: Rect<f64>) -> Vec<&Venue> {
        registry::get_venues_in_bounding_box(&self.venues, bounds)
    }

    pub fn venues_by_distance(&self, reference: Point<f64>) -> Vec<(&Venue, f64)> {
        registry::sort_venues_by_distance(&self.venues, reference)
    }

    /// Walking route between two venues identified by id
    ///
    /// # Errors
    ///
    /// Returns [`Error::VenueNotFound`] if either id is unknown
    pub fn directions(&self, from_id: &str, to_id: &str) -> Result<Route, Error> {
        let from = self
            .venue(from_id)
            .ok_or_else(|| Error::VenueNotFound(from_id.to_string()))?;
        let to = self
            .venue(to_id)
            .ok_or_else(|| Error::VenueNotFound(to_id.to_string()))?;

        Ok(self.route_between(from, to))
    }

    /// Walking route between two venues over this campus' pathways
    pub fn route_between(&self, from: &Venue, to: &Venue) -> Route {
        plan_route_with_fallback(
            from,
            to,
            &self.pathways,
            &ViaCampusCenter::new(self.center),
        )
    }

    /// Route lengths in meters between every ordered pair of venues
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        venue_distance_matrix_with_fallback(
            &self.venues,
            &self.pathways,
            &ViaCampusCenter::new(self.center),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::CAMPUS_CENTER;

    fn campus() -> CampusMap {
        CampusMap::new(
            vec![
                Venue::new("a", "Alpha", Point::new(28.0300, -26.1920)),
                Venue::new("b", "Beta", Point::new(28.0310, -26.1920)),
                Venue::new("a", "Shadowed", Point::new(28.0400, -26.1800)),
            ],
            vec![Pathway::from_lng_lat(
                "P1",
                &[(28.0300, -26.1920), (28.0310, -26.1920)],
            )],
            CAMPUS_CENTER,
        )
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let campus = campus();
        assert_eq!(campus.venue("a").map(|v| v.name.as_str()), Some("Alpha"));
        assert_eq!(campus.venue_count(), 2);
        assert!(campus.venues().iter().all(|v| v.name != "Shadowed"));
        assert_eq!(campus.pathway_count(), 1);
    }

    #[test]
    fn test_directions_unknown_venue() {
        let campus = campus();
        let err = campus.directions("a", "nowhere").unwrap_err();
        assert!(matches!(err, Error::VenueNotFound(id) if id == "nowhere"));
    }

    #[test]
    fn test_directions_along_single_pathway() {
        let campus = campus();
        let route = campus.directions("a", "b").unwrap();

        assert_eq!(route.points.first(), Some(&Point::new(28.0300, -26.1920)));
        assert_eq!(route.points.last(), Some(&Point::new(28.0310, -26.1920)));
        assert!((route.total_distance_meters - 99.8).abs() < 0.5);
    }

    #[test]
    fn test_distance_matrix_shape() {
        let campus = campus();
        let matrix = campus.distance_matrix();

        // one row and column per distinct id
        assert_eq!(matrix.len(), 2);
        assert!(matrix.iter().all(|row| row.len() == 2));
        assert_eq!(matrix[0][0], 0.0);
        assert!(matrix[0][1] > 0.0);
    }
}
