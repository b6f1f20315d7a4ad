use tracing::debug;

use crate::{
    error::AppResult,
    models::{Genre, Movie},
};

/// Upstream capability the listing pipeline runs against. Implemented by
/// [`TmdbClient`](crate::tmdb::TmdbClient) and by in-process fakes in tests.
#[allow(async_fn_in_trait)]
pub trait MovieSource {
    async fn trending(&self) -> AppResult<Vec<Movie>>;
    async fn search(&self, query: &str) -> AppResult<Vec<Movie>>;
    async fn genres(&self) -> AppResult<Vec<Genre>>;
}

/// Two-step listing pipeline: primary fetch (search when a non-empty query
/// is given, trending otherwise), then the genre catalog, then an in-memory
/// join attaching genre names to each movie. Both upstream calls are
/// sequential; the catalog is refetched per request.
pub async fn fetch_listing<S: MovieSource>(
    source: &S,
    search: Option<&str>,
) -> AppResult<Vec<Movie>> {
    let mut movies = match search {
        Some(query) if !query.is_empty() => {
            debug!(query, "searching movies");
            source.search(query).await?
        },
        _ => {
            debug!("fetching trending movies");
            source.trending().await?
        },
    };

    let catalog = source.genres().await?;
    for movie in &mut movies {
        movie.genres = movie_genres(&movie.genre_ids, &catalog);
    }

    debug!(count = movies.len(), "fetched movie listing");
    Ok(movies)
}

/// For each id in `genre_ids`, in order, the first catalog entry with that
/// id. Unmatched ids are dropped; repeated ids yield repeated genres.
pub fn movie_genres(genre_ids: &[i32], catalog: &[Genre]) -> Vec<Genre> {
    genre_ids
        .iter()
        .filter_map(|id| catalog.iter().find(|g| g.id == *id))
        .cloned()
        .collect()
}
