use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use super::route::format_distance;
use crate::{
    Error,
    model::{Pathway, Route, Venue},
};

/// `Point` feature per venue with `id` and `name` properties
pub fn create_venues_geojson(venues: &[Venue]) -> Result<FeatureCollection, Error> {
    let features = venues
        .iter()
        .map(venue_feature)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// `LineString` feature per pathway with a `name` property
pub fn create_pathways_geojson(pathways: &[Pathway]) -> Result<FeatureCollection, Error> {
    let features = pathways
        .iter()
        .map(pathway_feature)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Single `LineString` feature for a computed route.
///
/// `walking_seconds` is `null` when `walking_speed` is not positive.
pub fn create_route_geojson(
    route: &Route,
    from: &Venue,
    to: &Venue,
    walking_speed: f64,
) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&route.to_line_string()));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "from": from.id,
            "from_name": from.name,
            "to": to.id,
            "to_name": to.name,
            "distance_meters": route.total_distance_meters,
            "distance_text": format_distance(route.total_distance_meters),
            "walking_seconds": route.walking_time_seconds(walking_speed),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn venue_feature(venue: &Venue) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&venue.coordinates));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "id": venue.id,
            "name": venue.name,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn pathway_feature(pathway: &Pathway) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&pathway.coordinates));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "name": pathway.name,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
