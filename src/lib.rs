pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub tmdb: Arc<TmdbClient>,
}

/// Builds the full router, CORS and trace layers included, so integration
/// tests exercise the same stack as `main`. The CORS layer answers OPTIONS
/// requests itself; handlers never see them.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(routes::movies))
        .route("/save-movie", post(routes::save_movie))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
