//! Card payloads: movies as the browser draws them.

use reelscout_core::{ImageConfig, MovieApp, MovieId, MovieSummary};
use serde::Serialize;

/// A movie card: poster, title, rating and favorite heart.
#[derive(Debug, Clone, Serialize)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub rating: String,
    pub favorite: bool,
}

impl MovieCard {
    pub fn new(movie: &MovieSummary, images: &ImageConfig, favorite: bool) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            poster_url: movie.poster_url(images),
            rating: movie.rating_label(),
            favorite,
        }
    }
}

/// Cards for `movies`, with the heart state read from the favorites store.
pub fn cards(app: &MovieApp, images: &ImageConfig, movies: &[MovieSummary]) -> Vec<MovieCard> {
    movies
        .iter()
        .map(|movie| MovieCard::new(movie, images, app.is_favorite(movie.id)))
        .collect()
}
