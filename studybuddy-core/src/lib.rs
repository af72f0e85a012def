//! Campus map core for Wits Study Buddy
//!
//! Geometry primitives, the venue/pathway registry, pathway snapping
//! and route composition between campus venues.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{CampusDataConfig, builtin_campus_map, create_campus_map};
pub use model::{CampusMap, Pathway, Route, Venue};

/// Walking speed used for time estimates, meters per second
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;
