//! Recommendation feed driven by the watch history.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use super::history::RecentlyWatched;
use crate::catalog::{MovieCatalog, MovieId, MovieList};
use crate::metrics::{STALE_RESPONSES_DROPPED, WATCHED_RECORDED};
use crate::presenter::{Container, Presenter, RenderMode, Section, FETCH_FAILED_MESSAGE};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key of the watch history blob.
pub const RECENTLY_WATCHED_KEY: &str = "recentlyWatched";

/// What a refresh did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// No history; section hidden, nothing fetched.
    Hidden,
    /// Recommendations for `movie_id` rendered.
    Rendered { movie_id: MovieId, count: usize },
    /// A later refresh took over.
    Superseded,
    /// Transport failure, already alerted.
    Failed,
}

/// Keeps the watch history and the recommendations shown for it.
pub struct RecommendationFeed {
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn KeyValueStore>,
    presenter: Arc<dyn Presenter>,
    generation: AtomicU64,
    /// Held across the history load-modify-save, never across an await.
    history_lock: Mutex<()>,
}

impl RecommendationFeed {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        store: Arc<dyn KeyValueStore>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            catalog,
            store,
            presenter,
            generation: AtomicU64::new(0),
            history_lock: Mutex::new(()),
        }
    }

    /// Persisted history. A missing or unreadable blob counts as empty.
    pub fn history(&self) -> RecentlyWatched {
        let blob = match self.store.get(RECENTLY_WATCHED_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return RecentlyWatched::new(),
            Err(e) => {
                warn!("Failed to read watch history: {}", e);
                return RecentlyWatched::new();
            }
        };

        match serde_json::from_str::<Vec<MovieId>>(&blob) {
            Ok(ids) => RecentlyWatched::from_ids(ids),
            Err(e) => {
                warn!("Ignoring unreadable watch history blob: {}", e);
                RecentlyWatched::new()
            }
        }
    }

    /// Record `id` as watched, persist the history and refresh.
    pub async fn record_watched(&self, id: MovieId) -> Result<RefreshOutcome, StorageError> {
        {
            let _guard = self
                .history_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let mut history = self.history();
            history.push(id);

            let blob = serde_json::to_string(&history)?;
            self.store.set(RECENTLY_WATCHED_KEY, &blob)?;

            WATCHED_RECORDED.inc();
            debug!("Recorded watched movie {}: history={:?}", id, history.ids());
        }

        Ok(self.refresh_recommendations().await)
    }

    /// Replace the recommendations with those for the most recent movie.
    pub async fn refresh_recommendations(&self) -> RefreshOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(movie_id) = self.history().most_recent() else {
            self.presenter
                .set_section_visible(Section::Recommendations, false);
            self.presenter
                .render(Container::Recommendations, &[], RenderMode::Replace);
            return RefreshOutcome::Hidden;
        };

        let result = self
            .catalog
            .fetch_page(&MovieList::recommendations(movie_id), 1)
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            STALE_RESPONSES_DROPPED
                .with_label_values(&["recommendations"])
                .inc();
            debug!("Dropping superseded recommendations for movie {}", movie_id);
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                self.presenter
                    .render(Container::Recommendations, &page.results, RenderMode::Replace);
                self.presenter
                    .set_section_visible(Section::Recommendations, !page.results.is_empty());
                RefreshOutcome::Rendered {
                    movie_id,
                    count: page.results.len(),
                }
            }
            Err(e) => {
                warn!("Failed to fetch recommendations for {}: {}", movie_id, e);
                self.presenter.alert(FETCH_FAILED_MESSAGE);
                RefreshOutcome::Failed
            }
        }
    }
}
