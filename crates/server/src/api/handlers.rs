//! Health, config, metrics and view snapshot handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use reelscout_core::{Container, SanitizedConfig, SearchSnapshot, SearchStatus, Section, View};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::cards::{cards, MovieCard};
use crate::metrics::{collect_dynamic_metrics, encode_metrics};
use crate::state::AppState;

const CONTAINERS: [Container; 6] = [
    Container::SearchResults,
    Container::Popular,
    Container::TopRated,
    Container::Upcoming,
    Container::Favorites,
    Container::Recommendations,
];

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: message.into(),
            }),
        )
    }
}

/// Search status line as painted under the results.
#[derive(Debug, Serialize)]
pub struct SearchStatusResponse {
    #[serde(flatten)]
    pub status: SearchStatus,
    pub summary: String,
}

impl From<SearchStatus> for SearchStatusResponse {
    fn from(status: SearchStatus) -> Self {
        Self {
            summary: status.summary(),
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub favorites: bool,
    pub recommendations: bool,
}

/// Everything the browser needs to repaint from scratch.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: View,
    pub loading: bool,
    pub search: SearchStatusResponse,
    pub session: SearchSnapshot,
    pub sections: SectionsResponse,
    pub containers: BTreeMap<&'static str, Vec<MovieCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_alert: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /api/v1/metrics
///
/// Prometheus text exposition.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    collect_dynamic_metrics(&state);
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

/// GET /api/v1/view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewResponse> {
    let view = state.view().snapshot();

    let containers = CONTAINERS
        .iter()
        .map(|&container| {
            (
                container.as_str(),
                cards(state.app(), state.images(), view.movies(container)),
            )
        })
        .collect();

    Json(ViewResponse {
        view: view.view,
        loading: view.loading,
        search: view.search.clone().into(),
        session: state.app().search_snapshot(),
        sections: SectionsResponse {
            favorites: view.section_visible(Section::Favorites),
            recommendations: view.section_visible(Section::Recommendations),
        },
        containers,
        last_alert: view.last_alert,
    })
}
