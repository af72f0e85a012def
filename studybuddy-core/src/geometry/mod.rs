//! Planar and spherical geometry over `[lng, lat]` coordinates
//!
//! Points are `geo::Point<f64>` with `x` as longitude and `y` as latitude.
//! None of these functions validate their input; use
//! [`is_valid_coordinate`] beforehand where it matters.

mod distance;
mod segment;
mod validation;

pub use distance::{EARTH_RADIUS_METERS, distance, path_length, point_distance};
pub use segment::{closest_point_on_segment, line_intersection};
pub use validation::{is_valid_coordinate, is_valid_venue};
