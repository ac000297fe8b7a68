//! Search API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use reelscout_core::{Container, SearchOutcome, SearchSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cards::{cards, MovieCard};
use super::handlers::SearchStatusResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Raw search box contents; trimmed server-side.
    pub query: String,
}

/// Result of a search call plus the search results as now displayed.
///
/// A superseded or failed call still answers 200: the outcome says what
/// happened, and the displayed results belong to whichever request won.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub outcome: SearchOutcome,
    pub status: SearchStatusResponse,
    pub session: SearchSnapshot,
    pub results: Vec<MovieCard>,
}

fn respond(state: &AppState, outcome: SearchOutcome) -> Json<SearchResponse> {
    let view = state.view().snapshot();
    Json(SearchResponse {
        outcome,
        results: cards(
            state.app(),
            state.images(),
            view.movies(Container::SearchResults),
        ),
        status: view.search.into(),
        session: state.app().search_snapshot(),
    })
}

/// POST /api/v1/search
///
/// The search box changed. An empty query returns to the browse view.
pub async fn submit_query(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let outcome = state.app().on_query_changed(&body.query).await;
    debug!(query = %body.query, ?outcome, "Search submitted");
    respond(&state, outcome)
}

/// POST /api/v1/search/more
///
/// Fetch the next page of the current search.
pub async fn load_more(State(state): State<Arc<AppState>>) -> Json<SearchResponse> {
    let outcome = state.app().on_load_more_clicked().await;
    debug!(?outcome, "Load more");
    respond(&state, outcome)
}
