//! Wits Braamfontein East campus, as shipped with the app

use geo::Point;

use crate::model::{CampusMap, Pathway, Venue};
use crate::routing::CAMPUS_CENTER;

const VENUES: &[(&str, &str, f64, f64)] = &[
    ("great-hall", "Great Hall", 28.0305, -26.1915),
    ("wartenweiler", "Wartenweiler Library", 28.0298, -26.1908),
    ("cullen", "Cullen Library", 28.0289, -26.1902),
    ("senate-house", "Solomon Mahlangu House", 28.0312, -26.1925),
    ("matrix", "The Matrix", 28.0321, -26.1896),
    ("fnb", "FNB Building", 28.0276, -26.1921),
    ("chamber-of-mines", "Chamber of Mines Building", 28.0262, -26.1930),
    ("science-stadium", "Wits Science Stadium", 28.0282, -26.1940),
    ("amphitheatre", "Amphitheatre", 28.0308, -26.1919),
    ("origins", "Origins Centre", 28.0336, -26.1927),
    ("oliver-schreiner", "Oliver Schreiner School of Law", 28.0290, -26.1890),
    ("sports-hall", "Old Mutual Sports Hall", 28.0334, -26.1911),
];

const PATHWAYS: &[(&str, &[(f64, f64)])] = &[
    (
        "Main Walkway",
        &[
            (28.0262, -26.1926),
            (28.0276, -26.1924),
            (28.0292, -26.1921),
            (28.0305, -26.1920),
            (28.0320, -26.1922),
            (28.0336, -26.1924),
        ],
    ),
    (
        "Library Lawns",
        &[
            (28.0289, -26.1898),
            (28.0296, -26.1906),
            (28.0303, -26.1913),
            (28.0306, -26.1925),
            (28.0312, -26.1929),
        ],
    ),
    (
        "East Campus Loop",
        &[
            (28.0321, -26.1900),
            (28.0330, -26.1906),
            (28.0334, -26.1914),
            (28.0333, -26.1926),
        ],
    ),
    (
        "Science Stadium Walk",
        &[(28.0270, -26.1944), (28.0282, -26.1937), (28.0286, -26.1931)],
    ),
    (
        "Yale Road Path",
        &[(28.0284, -26.1889), (28.0296, -26.1891), (28.0316, -26.1895)],
    ),
];

pub fn builtin_venues() -> Vec<Venue> {
    VENUES
        .iter()
        .map(|&(id, name, lng, lat)| Venue::new(id, name, Point::new(lng, lat)))
        .collect()
}

pub fn builtin_pathways() -> Vec<Pathway> {
    PATHWAYS
        .iter()
        .map(|&(name, points)| Pathway::from_lng_lat(name, points))
        .collect()
}

pub fn builtin_campus_map() -> CampusMap {
    CampusMap::new(builtin_venues(), builtin_pathways(), CAMPUS_CENTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{is_valid_coordinate, is_valid_venue};

    #[test]
    fn test_builtin_data_is_valid() {
        let campus = builtin_campus_map();
        assert!(campus.venues().iter().all(is_valid_venue));
        assert!(campus.pathways().iter().all(|p| p.len() >= 2));
        assert!(
            campus
                .pathways()
                .iter()
                .flat_map(|p| p.vertices())
                .all(is_valid_coordinate)
        );
    }

    #[test]
    fn test_builtin_venue_ids_are_unique() {
        let venues = builtin_venues();
        for venue in &venues {
            assert_eq!(venues.iter().filter(|v| v.id == venue.id).count(), 1);
        }
    }

    #[test]
    fn test_every_builtin_pair_has_a_route() {
        let campus = builtin_campus_map();
        let matrix = campus.distance_matrix();
        for (i, row) in matrix.iter().enumerate() {
            for (j, &meters) in row.iter().enumerate() {
                assert!(meters.is_finite());
                assert_eq!(i == j, meters == 0.0, "{i} -> {j}");
            }
        }
    }
}
