//! Campus data model
//!
//! Venues and pathways are static program data; routes are derived per
//! request and never stored.

mod campus;
mod pathway;
pub mod registry;
mod route;
mod venue;

pub use campus::CampusMap;
pub use pathway::Pathway;
pub use route::Route;
pub use venue::Venue;
