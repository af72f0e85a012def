use log::debug;

use super::fallback::{FallbackStrategy, ViaCampusCenter};
use super::path::find_path_with_fallback;
use super::snapping::find_nearest_pathway_point;
use crate::model::{Pathway, Route, Venue};

/// Plans a walking route between two venues over the pathway network.
///
/// Each venue is snapped onto its nearest pathway point and the snapped
/// points are joined with [`find_path_with_fallback`]. The route always
/// starts and ends at the venue coordinates. Without pathway data it
/// degrades to a straight line.
pub fn plan_route(start: &Venue, end: &Venue, pathways: &[Pathway]) -> Route {
    plan_route_with_fallback(start, end, pathways, &ViaCampusCenter::default())
}

pub fn plan_route_with_fallback<F>(
    start: &Venue,
    end: &Venue,
    pathways: &[Pathway],
    fallback: &F,
) -> Route
where
    F: FallbackStrategy + ?Sized,
{
    let start_snap = find_nearest_pathway_point(start.coordinates, pathways);
    let end_snap = find_nearest_pathway_point(end.coordinates, pathways);

    let path = find_path_with_fallback(start_snap, end_snap, pathways, fallback);
    if path.is_empty() {
        debug!(
            "No pathway data, routing '{}' -> '{}' in a straight line",
            start.id, end.id
        );
    }

    let mut points = Vec::with_capacity(path.len() + 2);
    points.push(start.coordinates);
    points.extend(path);
    points.push(end.coordinates);

    Route::from_points(points)
}

/// Human readable distance: whole meters below one kilometer,
/// kilometers with one decimal otherwise
pub fn format_distance(meters: f64) -> String {
    if meters.round() < 1000.0 {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}
