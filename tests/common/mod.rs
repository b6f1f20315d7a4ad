use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    body::Body,
    extract::Query,
    http::{HeaderMap, Request, StatusCode, header},
    response::Response,
    routing::{get, post},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use reelfront::{AppState, config::Config, tmdb::TmdbClient};

/// Serve a stub router on an ephemeral local port, returning its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Build the full application router pointed at stub upstream/backend URLs.
/// Mirrors the wiring in `main` so tests exercise the same middleware stack.
pub fn build_app(tmdb_base: &str, backend_url: &str) -> Router {
    let config = Arc::new(Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        tmdb_api_key: "test-key".to_string(),
        tmdb_base_url: tmdb_base.to_string(),
        image_base_url: "https://img.test/w500".to_string(),
        backend_url: backend_url.to_string(),
    });

    let http = reqwest::Client::new();
    let tmdb = TmdbClient::new(
        http.clone(),
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
    );

    reelfront::app(Arc::new(AppState { config, http, tmdb: Arc::new(tmdb) }))
}

/// Stub movie database: distinguishable trending vs search payloads plus a
/// three-entry genre catalog.
pub fn stub_tmdb() -> Router {
    Router::new()
        .route(
            "/trending/movie/day",
            get(|| async {
                Json(json!({"results": [
                    {
                        "id": 1,
                        "title": "Trending One",
                        "poster_path": "/t1.jpg",
                        "release_date": "2024-02-10",
                        "overview": "first trending movie",
                        "vote_average": 7.5,
                        "genre_ids": [18, 28]
                    },
                    {"id": 2, "title": "Trending Two", "genre_ids": [99]}
                ]}))
            }),
        )
        .route(
            "/search/movie",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("query").cloned().unwrap_or_default();
                Json(json!({"results": [
                    {"id": 3, "title": format!("Result for {query}"), "genre_ids": [35]}
                ]}))
            }),
        )
        .route(
            "/genre/movie/list",
            get(|| async {
                Json(json!({"genres": [
                    {"id": 18, "name": "Drama"},
                    {"id": 28, "name": "Action"},
                    {"id": 35, "name": "Comedy"}
                ]}))
            }),
        )
}

/// Stub movie database whose every endpoint fails with a 500.
pub fn stub_tmdb_failing() -> Router {
    async fn boom() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "upstream-secret-detail")
    }
    Router::new()
        .route("/trending/movie/day", get(boom))
        .route("/search/movie", get(boom))
        .route("/genre/movie/list", get(boom))
}

/// Stub backend API: answers 201 echoing the received body and the
/// Authorization header it saw.
pub fn stub_backend() -> Router {
    Router::new().route(
        "/api/movies",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            (StatusCode::CREATED, Json(json!({"auth": auth, "received": body})))
        }),
    )
}

pub async fn get_uri(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
