use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use crate::{AppState, catalog, error::AppResult, models::SaveMovieRequest, templates};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    search: Option<String>,
}

pub async fn movies(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MoviesQuery>,
) -> AppResult<Html<String>> {
    let search = q.search.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let movies = catalog::fetch_listing(&*state.tmdb, search).await?;

    let mut body = String::new();
    for movie in &movies {
        body.push_str(&templates::movie_card(&state.config.image_base_url, movie).into_string());
    }

    Ok(Html(body))
}

pub async fn save_movie(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let movie: SaveMovieRequest = match serde_json::from_slice(&body) {
        Ok(movie) => movie,
        Err(err) => {
            debug!(error = %err, "rejecting malformed save-movie body");
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "invalid JSON format"})))
                .into_response();
        },
    };

    let mut req = state.http.post(&state.config.backend_url).json(&movie);
    if let Some(auth) = headers.get(header::AUTHORIZATION) {
        req = req.header(header::AUTHORIZATION, auth.clone());
    }

    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(err) => {
            error!(error = %err, url = %state.config.backend_url, "backend unreachable");
            return (StatusCode::BAD_GATEWAY, "Error connecting to API").into_response();
        },
    };

    // Relay the backend's status and body verbatim.
    let status = resp.status();
    match resp.bytes().await {
        Ok(bytes) => (status, bytes).into_response(),
        Err(err) => {
            error!(error = %err, "failed to read backend response");
            (StatusCode::BAD_GATEWAY, "Error connecting to API").into_response()
        },
    }
}
