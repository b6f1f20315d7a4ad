use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct Movie {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    /// Resolved from the genre catalog after fetch, never part of the
    /// upstream payload.
    #[serde(skip)]
    pub genres: Vec<Genre>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Body accepted on the save path and forwarded to the backend API.
/// Every field is defaulted so partial JSON decodes with zero values.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SaveMovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub rating: f64,
}
