use std::path::PathBuf;

use geo::Point;

use crate::routing::CAMPUS_CENTER;

/// Where to read campus data from
///
/// A `None` path falls back to the built-in dataset for that kind of data.
#[derive(Debug, Clone)]
pub struct CampusDataConfig {
    /// CSV with `venue_id,venue_name,lng,lat`
    pub venues_path: Option<PathBuf>,
    /// CSV with `pathway_name,point_sequence,lng,lat`
    pub pathways_path: Option<PathBuf>,
    /// Connector point for pathways that never cross
    pub campus_center: Point<f64>,
}

impl Default for CampusDataConfig {
    fn default() -> Self {
        Self {
            venues_path: None,
            pathways_path: None,
            campus_center: CAMPUS_CENTER,
        }
    }
}
