//! Favorites API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use reelscout_core::{MovieId, MovieSummary};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::cards::MovieCard;
use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub movie: MovieSummary,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub id: MovieId,
    pub favorite: bool,
}

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<Vec<MovieCard>> {
    let favorites = state
        .app()
        .favorites()
        .iter()
        .map(|movie| MovieCard::new(movie, state.images(), true))
        .collect();
    Json(favorites)
}

/// POST /api/v1/favorites/toggle
///
/// Add the movie to favorites, or remove it if already there.
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ToggleFavoriteRequest>,
) -> Result<Json<ToggleFavoriteResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.app().on_favorite_toggled(&body.movie) {
        Ok(favorite) => Ok(Json(ToggleFavoriteResponse {
            id: body.movie.id,
            favorite,
        })),
        Err(e) => {
            error!(movie_id = body.movie.id, "Failed to save favorites: {}", e);
            Err(ErrorResponse::internal(format!(
                "Failed to save favorites: {}",
                e
            )))
        }
    }
}
