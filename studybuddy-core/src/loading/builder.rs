use geo::{ConvexHull, Intersects, MultiPoint};
use log::{info, warn};

use super::builtin::{builtin_pathways, builtin_venues};
use super::config::CampusDataConfig;
use super::records::{load_pathways, load_venues};
use crate::geometry::{is_valid_coordinate, is_valid_venue};
use crate::{CampusMap, Error, Pathway, Venue};

/// Creates a campus map based on the provided configuration
///
/// Invalid venues and pathways with fewer than two points are dropped
/// with a warning.
///
/// # Errors
///
/// Returns an error if a configured file is missing or unreadable, the
/// campus centre is not a valid coordinate, or no valid venue remains
pub fn create_campus_map(config: &CampusDataConfig) -> Result<CampusMap, Error> {
    validate_config(config)?;

    let venues = match &config.venues_path {
        Some(path) => {
            info!("Loading venues from {}", path.display());
            load_venues(path)?
        }
        None => {
            info!("Using built-in campus venues");
            builtin_venues()
        }
    };

    let pathways = match &config.pathways_path {
        Some(path) => {
            info!("Loading pathways from {}", path.display());
            load_pathways(path)?
        }
        None => {
            info!("Using built-in campus pathways");
            builtin_pathways()
        }
    };

    let venues = retain_valid_venues(venues);
    if venues.is_empty() {
        return Err(Error::InvalidData("No valid venues loaded".to_string()));
    }
    let pathways = retain_valid_pathways(pathways);
    if pathways.is_empty() {
        warn!("No pathways loaded, every route will be a straight line");
    } else {
        validate_venue_pathway_overlap(&venues, &pathways);
    }

    info!(
        "Campus map created with {} venues and {} pathways",
        venues.len(),
        pathways.len()
    );

    Ok(CampusMap::new(venues, pathways, config.campus_center))
}

fn validate_config(config: &CampusDataConfig) -> Result<(), Error> {
    for path in [&config.venues_path, &config.pathways_path].into_iter().flatten() {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Campus data file not found: {}", path.display()),
            )));
        }
    }

    if !is_valid_coordinate(config.campus_center) {
        return Err(Error::InvalidData(format!(
            "Campus centre is not a valid coordinate: {:?}",
            config.campus_center.x_y()
        )));
    }

    Ok(())
}

fn retain_valid_venues(venues: Vec<Venue>) -> Vec<Venue> {
    venues
        .into_iter()
        .filter(|venue| {
            let valid = is_valid_venue(venue);
            if !valid {
                warn!("Skipping invalid venue '{}' ({})", venue.id, venue.name);
            }
            valid
        })
        .collect()
}

fn retain_valid_pathways(pathways: Vec<Pathway>) -> Vec<Pathway> {
    pathways
        .into_iter()
        .filter(|pathway| {
            if pathway.len() < 2 {
                warn!(
                    "Skipping pathway '{}' with {} point(s)",
                    pathway.name,
                    pathway.len()
                );
                return false;
            }
            if !pathway.vertices().all(is_valid_coordinate) {
                warn!("Skipping pathway '{}' with invalid coordinates", pathway.name);
                return false;
            }
            true
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn validate_venue_pathway_overlap(venues: &[Venue], pathways: &[Pathway]) {
    let vertices: MultiPoint = pathways.iter().flat_map(|p| p.vertices()).collect();
    let hull = vertices.convex_hull();

    let outside = venues
        .iter()
        .filter(|venue| !venue.coordinates.intersects(&hull))
        .count();

    if outside > 0 {
        let percentage = (outside as f64 / venues.len() as f64) * 100.0;
        warn!(
            "{outside} of {} venues ({percentage:.1}%) lie outside the pathway network. \
        Routes to them will end with a straight segment.",
            venues.len()
        );
    }
}
