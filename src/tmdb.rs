use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    catalog::MovieSource,
    error::AppResult,
    models::{Genre, Movie},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        // Warn once on app load; requests will still go out and get rejected.
        if api_key.trim().is_empty() {
            tracing::warn!("no TMDB_API_KEY provided");
        }
        Self { client, api_key, base_url }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        stage: &str,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .with_context(|| format!("{stage} request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("{stage} returned status {status}").into());
        }

        Ok(resp.json().await.with_context(|| format!("failed to decode {stage} response"))?)
    }
}

impl MovieSource for TmdbClient {
    async fn trending(&self) -> AppResult<Vec<Movie>> {
        let resp: ListingResponse =
            self.get_json("/trending/movie/day", &[], "trending fetch").await?;
        Ok(resp.results)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        let resp: ListingResponse =
            self.get_json("/search/movie", &[("query", query)], "search fetch").await?;
        Ok(resp.results)
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        let resp: GenreListResponse = self.get_json("/genre/movie/list", &[], "genre fetch").await?;
        Ok(resp.genres)
    }
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}
