pub mod clock;
pub mod config;
pub mod error;
pub mod geofence;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::clock::Clock;
use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::storage::AttendanceStore;

pub fn build_app(
    store: Arc<dyn AttendanceStore>,
    clock: Arc<dyn Clock>,
    config: Config,
) -> Router {
    let cors = match config
        .allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    };

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        clock,
        config,
    });

    Router::new()
        .merge(routes::submission_routes())
        .route("/health", axum::routing::get(health))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
