use rayon::prelude::*;

use super::fallback::{FallbackStrategy, ViaCampusCenter};
use super::route::plan_route_with_fallback;
use crate::model::{Pathway, Venue};

/// Route length in meters between every ordered pair of venues.
///
/// Rows are origins, columns destinations; the diagonal is zero.
pub fn venue_distance_matrix(venues: &[Venue], pathways: &[Pathway]) -> Vec<Vec<f64>> {
    venue_distance_matrix_with_fallback(venues, pathways, &ViaCampusCenter::default())
}

pub fn venue_distance_matrix_with_fallback<F>(
    venues: &[Venue],
    pathways: &[Pathway],
    fallback: &F,
) -> Vec<Vec<f64>>
where
    F: FallbackStrategy + Sync + ?Sized,
{
    venues
        .par_iter()
        .enumerate()
        .map(|(from_idx, from)| {
            venues
                .iter()
                .enumerate()
                .map(|(to_idx, to)| {
                    if from_idx == to_idx {
                        0.0
                    } else {
                        plan_route_with_fallback(from, to, pathways, fallback)
                            .total_distance_meters
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
