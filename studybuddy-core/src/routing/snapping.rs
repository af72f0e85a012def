use geo::Point;

use crate::geometry::{closest_point_on_segment, point_distance};
use crate::model::Pathway;

/// Projection of `coord` onto the nearest pathway segment.
///
/// Returns `coord` unchanged when no pathway has a segment.
pub fn find_nearest_pathway_point(coord: Point<f64>, pathways: &[Pathway]) -> Point<f64> {
    let mut nearest = coord;
    let mut best = f64::INFINITY;

    for segment in pathways.iter().flat_map(|pathway| pathway.segments()) {
        let candidate = closest_point_on_segment(coord, segment.start.into(), segment.end.into());
        let dist = point_distance(coord, candidate);
        if dist < best {
            best = dist;
            nearest = candidate;
        }
    }

    nearest
}

/// Pathway owning the vertex nearest to `point`.
///
/// Matches on vertices, not segments, so near long segments this can
/// disagree with [`find_nearest_pathway_point`]. Ties keep the first pathway.
pub fn find_closest_pathway(point: Point<f64>, pathways: &[Pathway]) -> Option<&Pathway> {
    let mut closest = None;
    let mut best = f64::INFINITY;

    for pathway in pathways {
        for vertex in pathway.vertices() {
            let dist = point_distance(point, vertex);
            if dist < best {
                best = dist;
                closest = Some(pathway);
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pathways() -> Vec<Pathway> {
        vec![
            Pathway::from_lng_lat("east-west", &[(28.0300, -26.1920), (28.0340, -26.1920)]),
            Pathway::from_lng_lat("north-south", &[(28.0350, -26.1900), (28.0350, -26.1950)]),
        ]
    }

    #[test]
    fn test_snaps_onto_segment_interior() {
        let snapped = find_nearest_pathway_point(Point::new(28.0320, -26.1925), &pathways());
        assert_relative_eq!(snapped.x(), 28.0320, epsilon = 1e-12);
        assert_relative_eq!(snapped.y(), -26.1920, epsilon = 1e-12);
    }

    #[test]
    fn test_snaps_to_other_pathway_when_closer() {
        let snapped = find_nearest_pathway_point(Point::new(28.0352, -26.1930), &pathways());
        assert_relative_eq!(snapped.x(), 28.0350, epsilon = 1e-12);
        assert_relative_eq!(snapped.y(), -26.1930, epsilon = 1e-12);
    }

    #[test]
    fn test_no_segments_returns_input() {
        let coord = Point::new(28.0320, -26.1925);
        assert_eq!(find_nearest_pathway_point(coord, &[]), coord);

        let stubs = vec![Pathway::from_lng_lat("stub", &[(28.0, -26.0)])];
        assert_eq!(find_nearest_pathway_point(coord, &stubs), coord);
    }

    #[test]
    fn test_closest_pathway_by_vertex() {
        let pathways = pathways();
        let closest = find_closest_pathway(Point::new(28.0301, -26.1921), &pathways);
        assert_eq!(closest.map(|p| p.name.as_str()), Some("east-west"));
        assert!(find_closest_pathway(Point::new(28.0, -26.0), &[]).is_none());
    }

    #[test]
    fn test_vertex_and_segment_lookups_can_disagree() {
        // Lies on the long east-west segment, far from its vertices, while
        // the short spur has a vertex a couple of dozen meters away.
        let pathways = vec![
            Pathway::from_lng_lat("long", &[(28.0300, -26.1920), (28.0400, -26.1920)]),
            Pathway::from_lng_lat("spur", &[(28.0350, -26.1922), (28.0350, -26.1950)]),
        ];
        let point = Point::new(28.0350, -26.1920);

        let closest = find_closest_pathway(point, &pathways).map(|p| p.name.as_str());
        assert_eq!(closest, Some("spur"));

        let snapped = find_nearest_pathway_point(point, &pathways);
        assert_relative_eq!(snapped.x(), 28.0350, epsilon = 1e-12);
        assert_relative_eq!(snapped.y(), -26.1920, epsilon = 1e-12);
    }
}
