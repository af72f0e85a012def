pub use crate::DEFAULT_WALKING_SPEED;
pub use crate::Error;

// Geometry primitives
pub use crate::geometry::{
    closest_point_on_segment, distance, is_valid_coordinate, is_valid_venue, line_intersection,
    path_length, point_distance,
};

// Campus data
pub use crate::loading::{CampusDataConfig, builtin_campus_map, create_campus_map};
pub use crate::model::{CampusMap, Pathway, Route, Venue};
pub use crate::model::registry::{
    find_venue_by_id, find_venue_by_name, get_venues_in_bounding_box, sort_venues_by_distance,
};

// Routing
pub use crate::routing::{
    CAMPUS_CENTER, DirectLine, FallbackStrategy, ViaCampusCenter, create_pathways_geojson,
    create_route_geojson, create_venues_geojson, find_closest_pathway,
    find_nearest_pathway_point, find_path_through_pathways, find_path_with_fallback,
    find_pathway_intersection, format_distance, plan_route, plan_route_with_fallback,
    venue_distance_matrix,
};
