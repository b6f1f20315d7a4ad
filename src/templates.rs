use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::models::{Genre, Movie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Fetches card fragments from `/movies` and appends them to the grid.
const LISTING_SCRIPT: &str = r#"
async function loadMovies(query) {
  const grid = document.getElementById('movies');
  grid.innerHTML = '';
  const url = query ? '/movies?search=' + encodeURIComponent(query) : '/movies';
  const resp = await fetch(url);
  grid.innerHTML = resp.ok ? await resp.text() : '<p class="text-red-600">Failed to load movies.</p>';
}
document.getElementById('search-form').addEventListener('submit', (e) => {
  e.preventDefault();
  loadMovies(document.getElementById('search').value.trim());
});
loadMovies('');
"#;

pub fn index_page() -> String {
    page(
        "Movie Explorer",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-5xl mx-auto px-6 py-10" {
                    h1 class="text-3xl font-bold text-gray-900" { "Movie Explorer" }
                    p class="mt-2 text-gray-600" { "Trending movies, or search for anything." }

                    form id="search-form" class="mt-6 flex gap-3" {
                        input class="flex-1 rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type="search" id="search" name="search" placeholder="Search movies";
                        button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                    }

                    div id="movies" class="mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3" {}
                }
            }
            script { (PreEscaped(LISTING_SCRIPT)) }
        },
    )
}

pub fn movie_card(image_base: &str, movie: &Movie) -> Markup {
    let poster = image_url(image_base, movie.poster_path.as_deref().unwrap_or(""));
    let year = format_year(&movie.release_date);
    let genre = primary_genre(&movie.genres);

    html! {
        div class="movie-card bg-white shadow rounded-lg overflow-hidden" data-movie-id=(movie.id) {
            @if poster.is_empty() {
                div class="h-72 bg-gray-200 flex items-center justify-center text-gray-400" { "No poster" }
            } @else {
                img class="w-full h-72 object-cover" src=(poster) alt=(movie.title) loading="lazy";
            }

            div class="p-4" {
                div class="flex items-start justify-between gap-2" {
                    h2 class="text-lg font-semibold text-gray-900" { (movie.title) }
                    span class="shrink-0 rounded bg-amber-100 px-2 py-0.5 text-sm font-medium text-amber-800" {
                        (format!("{:.1}", movie.vote_average))
                    }
                }
                p class="mt-1 text-sm text-gray-500" {
                    (year)
                    @if !year.is_empty() && !genre.is_empty() { " · " }
                    (genre)
                }
                p class="mt-3 text-sm text-gray-600 line-clamp-3" { (movie.overview) }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

/// First four bytes of the date string, or "" when it is shorter than four
/// bytes (or the cut would split a multi-byte character).
pub fn format_year(date: &str) -> &str {
    date.get(..4).unwrap_or("")
}

/// Name of the first resolved genre, or "" when none matched.
pub fn primary_genre(genres: &[Genre]) -> &str {
    genres.first().map(|g| g.name.as_str()).unwrap_or("")
}

/// Full poster URL, or "" when the movie has no poster path.
pub fn image_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!("{base}{path}")
}
