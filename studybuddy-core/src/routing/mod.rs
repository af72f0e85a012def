//! Campus routing: snapping venues onto the pathway network and
//! stitching an approximate walking route between them.
//!
//! This is not a shortest-path search. A route follows at most two
//! pathways joined at their first crossing; pathways that never cross
//! are bridged by a [`FallbackStrategy`].

mod fallback;
mod matrix;
mod path;
mod route;
mod snapping;
mod to_geojson;

pub use fallback::{CAMPUS_CENTER, DirectLine, FallbackStrategy, ViaCampusCenter};
pub use matrix::{venue_distance_matrix, venue_distance_matrix_with_fallback};
pub use path::{find_path_through_pathways, find_path_with_fallback, find_pathway_intersection};
pub use route::{format_distance, plan_route, plan_route_with_fallback};
pub use snapping::{find_closest_pathway, find_nearest_pathway_point};
pub use to_geojson::{create_pathways_geojson, create_route_geojson, create_venues_geojson};
