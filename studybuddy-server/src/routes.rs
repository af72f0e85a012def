use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use geo::{Point, Rect, coord};
use geojson::{Feature, FeatureCollection};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use studybuddy_core::{
    Error, Venue,
    geometry::is_valid_coordinate,
    routing::{create_pathways_geojson, create_route_geojson, create_venues_geojson},
};
use tracing::debug;

use crate::{error::AppError, state::AppState};

type AppResult<T> = Result<Json<T>, AppError>;

const DEFAULT_NEARBY_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub id: String,
    pub name: String,
    /// `[lng, lat]`
    pub coordinates: [f64; 2],
}

impl From<&Venue> for VenueResponse {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            coordinates: [venue.lng(), venue.lat()],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NearbyVenue {
    #[serde(flatten)]
    pub venue: VenueResponse,
    pub distance_meters: f64,
}

#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub venues: Vec<String>,
    pub distances: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    lng: f64,
    lat: f64,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct BoundsQuery {
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsQuery {
    from: String,
    to: String,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "venues": state.campus.venue_count(),
        "pathways": state.campus.pathway_count(),
    }))
}

pub async fn venues_handler(State(state): State<Arc<AppState>>) -> AppResult<FeatureCollection> {
    Ok(Json(create_venues_geojson(state.campus.venues())?))
}

pub async fn venue_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<VenueResponse> {
    state
        .campus
        .venue(&id)
        .map(|venue| Json(venue.into()))
        .ok_or_else(|| AppError::NotFound(format!("Venue not found: {id}")))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> AppResult<VenueResponse> {
    state
        .campus
        .find_venue_by_name(&query.name)
        .map(|venue| Json(venue.into()))
        .ok_or_else(|| AppError::NotFound(format!("No venue matches '{}'", query.name)))
}

pub async fn nearby_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Vec<NearbyVenue>> {
    let reference = Point::new(query.lng, query.lat);
    if !is_valid_coordinate(reference) {
        return Err(AppError::BadRequest(format!(
            "Invalid coordinate: [{}, {}]",
            query.lng, query.lat
        )));
    }

    let nearby = state
        .campus
        .venues_by_distance(reference)
        .into_iter()
        .take(query.limit.unwrap_or(DEFAULT_NEARBY_LIMIT))
        .map(|(venue, distance_meters)| NearbyVenue {
            venue: venue.into(),
            distance_meters,
        })
        .collect();

    Ok(Json(nearby))
}

pub async fn within_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BoundsQuery>,
) -> AppResult<Vec<VenueResponse>> {
    let corners = [
        Point::new(query.min_lng, query.min_lat),
        Point::new(query.max_lng, query.max_lat),
    ];
    if !corners.into_iter().all(is_valid_coordinate) {
        return Err(AppError::BadRequest("Invalid bounding box".to_string()));
    }
    if query.min_lng > query.max_lng || query.min_lat > query.max_lat {
        return Err(AppError::BadRequest(
            "Bounding box minimum exceeds maximum".to_string(),
        ));
    }

    let bounds = Rect::new(
        coord! { x: query.min_lng, y: query.min_lat },
        coord! { x: query.max_lng, y: query.max_lat },
    );
    let venues = state
        .campus
        .venues_within(bounds)
        .into_iter()
        .map(VenueResponse::from)
        .collect();

    Ok(Json(venues))
}

pub async fn pathways_handler(State(state): State<Arc<AppState>>) -> AppResult<FeatureCollection> {
    Ok(Json(create_pathways_geojson(state.campus.pathways())?))
}

pub async fn directions_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DirectionsQuery>,
) -> AppResult<Feature> {
    let campus = &state.campus;
    let from = campus
        .venue(&query.from)
        .ok_or_else(|| Error::VenueNotFound(query.from.clone()))?;
    let to = campus
        .venue(&query.to)
        .ok_or_else(|| Error::VenueNotFound(query.to.clone()))?;

    let route = campus.route_between(from, to);
    debug!(
        from = %from.id,
        to = %to.id,
        points = route.points.len(),
        meters = route.total_distance_meters,
        "Route planned"
    );

    Ok(Json(create_route_geojson(
        &route,
        from,
        to,
        state.walking_speed,
    )?))
}

pub async fn matrix_handler(State(state): State<Arc<AppState>>) -> AppResult<MatrixResponse> {
    let distances = tokio::task::spawn_blocking({
        let state = Arc::clone(&state);
        move || state.campus.distance_matrix()
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let venues = state
        .campus
        .venues()
        .iter()
        .map(|venue| venue.id.clone())
        .collect();

    Ok(Json(MatrixResponse { venues, distances }))
}
