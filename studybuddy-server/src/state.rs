use std::sync::Arc;

use studybuddy_core::{CampusMap, create_campus_map};
use tracing::info;

use crate::{config::Settings, error::ServerError};

pub struct AppState {
    pub campus: CampusMap,
    pub walking_speed: f64,
}

impl AppState {
    pub fn new(campus: CampusMap, walking_speed: f64) -> Arc<Self> {
        Arc::new(Self {
            campus,
            walking_speed,
        })
    }

    /// Loads campus data described by `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the campus data cannot be loaded
    pub fn load(settings: &Settings) -> Result<Arc<Self>, ServerError> {
        let data_config = settings.campus.data_config()?;
        let campus = create_campus_map(&data_config)?;

        info!(
            venues = campus.venue_count(),
            pathways = campus.pathway_count(),
            "Campus map ready"
        );

        Ok(Self::new(campus, settings.campus.walking_speed_mps))
    }
}
