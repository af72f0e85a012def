use geo::Point;
use log::trace;

use super::fallback::{FallbackStrategy, ViaCampusCenter};
use super::snapping::find_closest_pathway;
use crate::geometry::line_intersection;
use crate::model::Pathway;

/// First crossing between any segment of `a` and any segment of `b`
pub fn find_pathway_intersection(a: &Pathway, b: &Pathway) -> Option<Point<f64>> {
    a.segments().find_map(|seg_a| {
        b.segments().find_map(|seg_b| {
            line_intersection(
                seg_a.start.into(),
                seg_a.end.into(),
                seg_b.start.into(),
                seg_b.end.into(),
            )
        })
    })
}

/// Path between two snapped points, bridging disjoint pathways through
/// [`CAMPUS_CENTER`](super::CAMPUS_CENTER).
///
/// An empty result means there is no pathway data; callers draw a
/// straight line instead.
pub fn find_path_through_pathways(
    start: Point<f64>,
    end: Point<f64>,
    pathways: &[Pathway],
) -> Vec<Point<f64>> {
    find_path_with_fallback(start, end, pathways, &ViaCampusCenter::default())
}

/// Same as [`find_path_through_pathways`] with a caller-chosen fallback
pub fn find_path_with_fallback<F>(
    start: Point<f64>,
    end: Point<f64>,
    pathways: &[Pathway],
    fallback: &F,
) -> Vec<Point<f64>>
where
    F: FallbackStrategy + ?Sized,
{
    let (Some(start_pathway), Some(end_pathway)) = (
        find_closest_pathway(start, pathways),
        find_closest_pathway(end, pathways),
    ) else {
        return Vec::new();
    };

    if std::ptr::eq(start_pathway, end_pathway) {
        return vec![start, end];
    }

    if let Some(crossing) = find_pathway_intersection(start_pathway, end_pathway) {
        return vec![start, crossing, end];
    }

    trace!(
        "Pathways '{}' and '{}' do not cross, using fallback",
        start_pathway.name, end_pathway.name
    );
    fallback.connect(start, end, pathways)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{CAMPUS_CENTER, DirectLine};
    use approx::assert_relative_eq;

    fn crossing() -> Vec<Pathway> {
        vec![
            Pathway::from_lng_lat("horizontal", &[(0.0, 0.0), (10.0, 0.0)]),
            Pathway::from_lng_lat("vertical", &[(5.0, 5.0), (5.0, -5.0)]),
        ]
    }

    fn disjoint() -> Vec<Pathway> {
        vec![
            Pathway::from_lng_lat("west", &[(0.0, 0.0), (0.0, 10.0)]),
            Pathway::from_lng_lat("east", &[(10.0, 0.0), (10.0, 10.0)]),
        ]
    }

    #[test]
    fn test_intersection_of_crossing_pathways() {
        let pathways = crossing();
        let hit = find_pathway_intersection(&pathways[0], &pathways[1]);
        assert_eq!(hit, Some(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_intersection_returns_first_segment_hit() {
        let zigzag = Pathway::from_lng_lat("zigzag", &[(0.0, -1.0), (2.0, 1.0), (4.0, -1.0)]);
        let flat = Pathway::from_lng_lat("flat", &[(-1.0, 0.0), (5.0, 0.0)]);

        let hit = find_pathway_intersection(&zigzag, &flat).unwrap();
        assert_relative_eq!(hit.x(), 1.0);
        assert_relative_eq!(hit.y(), 0.0);
    }

    #[test]
    fn test_empty_pathways_give_empty_path() {
        let path = find_path_through_pathways(Point::new(1.0, 1.0), Point::new(2.0, 2.0), &[]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_same_pathway_gives_direct_pair() {
        let pathways = crossing();
        let (start, end) = (Point::new(1.0, 0.0), Point::new(9.0, 0.0));
        assert_eq!(find_path_through_pathways(start, end, &pathways), vec![start, end]);
    }

    #[test]
    fn test_crossing_pathways_go_through_intersection() {
        let pathways = crossing();
        let (start, end) = (Point::new(0.0, 0.0), Point::new(5.0, -5.0));

        let path = find_path_through_pathways(start, end, &pathways);
        assert_eq!(path, vec![start, Point::new(5.0, 0.0), end]);
    }

    #[test]
    fn test_disjoint_pathways_go_through_campus_center() {
        let pathways = disjoint();
        let (start, end) = (Point::new(0.0, 1.0), Point::new(10.0, 9.0));

        let path = find_path_through_pathways(start, end, &pathways);
        assert_eq!(path, vec![start, CAMPUS_CENTER, end]);
    }

    #[test]
    fn test_custom_fallback_strategy() {
        let pathways = disjoint();
        let (start, end) = (Point::new(0.0, 1.0), Point::new(10.0, 9.0));

        let direct = find_path_with_fallback(start, end, &pathways, &DirectLine);
        assert_eq!(direct, vec![start, end]);

        let via = ViaCampusCenter::new(Point::new(5.0, 5.0));
        let bridged = find_path_with_fallback(start, end, &pathways, &via);
        assert_eq!(bridged, vec![start, Point::new(5.0, 5.0), end]);
    }

    #[test]
    fn test_vertex_ties_resolve_to_first_pathway() {
        // Both endpoints tie between the two copies and resolve to the first one
        let pathways = vec![
            Pathway::from_lng_lat("a", &[(0.0, 0.0), (10.0, 0.0)]),
            Pathway::from_lng_lat("a", &[(0.0, 0.0), (10.0, 0.0)]),
        ];
        let (start, end) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let path = find_path_through_pathways(start, end, &pathways);
        assert_eq!(path, vec![start, end]);
    }
}
