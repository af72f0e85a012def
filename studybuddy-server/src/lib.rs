//! HTTP map service for Wits Study Buddy
//!
//! Serves campus venues and pathways as GeoJSON and plans walking
//! directions between venues for the map front end.

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use serde_json::json;
use tokio::{net::TcpListener, signal};
use tower::{BoxError, ServiceBuilder, limit::GlobalConcurrencyLimitLayer, timeout::TimeoutLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::{ServerSettings, Settings};
use error::ServerError;
use routes::{
    directions_handler, health_handler, matrix_handler, nearby_handler, pathways_handler,
    search_handler, venue_handler, venues_handler, within_handler,
};
use state::AppState;

pub fn build_router(state: Arc<AppState>, settings: &ServerSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let limits = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.request_timeout_secs,
        )))
        .layer(GlobalConcurrencyLimitLayer::new(settings.concurrency_limit));

    Router::new()
        .route("/health", get(health_handler))
        .route("/venues", get(venues_handler))
        .route("/venues/search", get(search_handler))
        .route("/venues/nearby", get(nearby_handler))
        .route("/venues/within", get(within_handler))
        .route("/venues/{id}", get(venue_handler))
        .route("/pathways", get(pathways_handler))
        .route("/directions", get(directions_handler))
        .route("/matrix", get(matrix_handler))
        .layer(limits)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Unhandled middleware error: {err}") })),
        )
    }
}

/// Loads campus data and serves requests until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if campus data cannot be loaded or the address
/// cannot be bound
pub async fn start_server(settings: Settings) -> Result<(), ServerError> {
    info!("Loading campus data...");
    let state = AppState::load(&settings)?;

    let app = build_router(state, &settings.server);

    let address = settings.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        } else {
            tracing::warn!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
