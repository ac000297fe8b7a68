//! Movie card and watch history handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reelscout_core::{MovieId, OverviewPreview, RefreshOutcome, DEFAULT_OVERVIEW_PREVIEW_CHARS};
use serde::Serialize;
use tracing::error;

use super::cards::MovieCard;
use super::handlers::ErrorResponse;
use crate::state::AppState;

/// Card details shown when a card is opened.
#[derive(Debug, Serialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub card: MovieCard,
    pub overview_preview: OverviewPreview,
    pub player_url: String,
}

#[derive(Debug, Serialize)]
pub struct OpenMovieResponse {
    pub id: MovieId,
    /// Present when the movie is currently displayed somewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieDetails>,
    pub recommendations: RefreshOutcome,
    pub recently_watched: Vec<MovieId>,
}

#[derive(Debug, Serialize)]
pub struct RecentlyWatchedResponse {
    /// Oldest first; the last id drives recommendations.
    pub ids: Vec<MovieId>,
}

/// POST /api/v1/movies/{id}/open
///
/// Record the movie as watched and refresh recommendations for it.
pub async fn open_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MovieId>,
) -> Result<Json<OpenMovieResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Look the card up first; the recommendation render may replace it.
    let movie = state.view().find_movie(id).map(|movie| MovieDetails {
        card: MovieCard::new(&movie, state.images(), state.app().is_favorite(id)),
        overview_preview: movie.overview_preview(DEFAULT_OVERVIEW_PREVIEW_CHARS),
        player_url: movie.player_url(),
    });

    let recommendations = state.app().on_card_opened(id).await.map_err(|e| {
        error!(movie_id = id, "Failed to save watch history: {}", e);
        ErrorResponse::internal(format!("Failed to save watch history: {}", e))
    })?;

    Ok(Json(OpenMovieResponse {
        id,
        movie,
        recommendations,
        recently_watched: state.app().recently_watched().ids().to_vec(),
    }))
}

/// GET /api/v1/recently-watched
pub async fn recently_watched(State(state): State<Arc<AppState>>) -> Json<RecentlyWatchedResponse> {
    Json(RecentlyWatchedResponse {
        ids: state.app().recently_watched().ids().to_vec(),
    })
}
