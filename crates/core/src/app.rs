//! Application facade: the session object UI events are dispatched to.

use std::sync::Arc;

use tracing::info;

use crate::browse::BrowseFeed;
use crate::catalog::{MovieCatalog, MovieId, MovieSummary};
use crate::favorites::FavoritesStore;
use crate::presenter::{Container, Presenter, RenderMode, Section};
use crate::recommendations::{RecentlyWatched, RecommendationFeed, RefreshOutcome};
use crate::search::{SearchController, SearchOutcome, SearchSnapshot};
use crate::storage::{KeyValueStore, StorageError};

/// Movie browser state and event handlers.
///
/// Search, favorites and recommendations are independent; only search
/// carries request sequencing state.
pub struct MovieApp {
    presenter: Arc<dyn Presenter>,
    search: SearchController,
    browse: BrowseFeed,
    favorites: FavoritesStore,
    recommendations: RecommendationFeed,
}

impl MovieApp {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        store: Arc<dyn KeyValueStore>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            search: SearchController::new(Arc::clone(&catalog), Arc::clone(&presenter)),
            browse: BrowseFeed::new(Arc::clone(&catalog), Arc::clone(&presenter)),
            favorites: FavoritesStore::new(Arc::clone(&store)),
            recommendations: RecommendationFeed::new(catalog, store, Arc::clone(&presenter)),
            presenter,
        }
    }

    /// Paint the start page: curated lists, favorites and recommendations.
    pub async fn initialize(&self) {
        self.browse.load_all().await;
        self.show_favorites();
        self.recommendations.refresh_recommendations().await;
        info!("Start page ready");
    }

    /// The search box changed.
    pub async fn on_query_changed(&self, text: &str) -> SearchOutcome {
        self.search.submit_query(text).await
    }

    /// "Load more" under the search results was clicked.
    pub async fn on_load_more_clicked(&self) -> SearchOutcome {
        self.search.load_next_page().await
    }

    /// The heart on a movie card was clicked. Returns the new state.
    pub fn on_favorite_toggled(&self, movie: &MovieSummary) -> Result<bool, StorageError> {
        let favorited = self.favorites.toggle(movie)?;
        self.show_favorites();
        Ok(favorited)
    }

    /// A movie card was opened.
    pub async fn on_card_opened(&self, id: MovieId) -> Result<RefreshOutcome, StorageError> {
        self.recommendations.record_watched(id).await
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites(&self) -> Vec<MovieSummary> {
        self.favorites.list()
    }

    pub fn recently_watched(&self) -> RecentlyWatched {
        self.recommendations.history()
    }

    pub fn search_snapshot(&self) -> SearchSnapshot {
        self.search.snapshot()
    }

    /// Re-render favorites; the section is only shown when non-empty.
    fn show_favorites(&self) {
        let movies = self.favorites.list();
        self.presenter
            .set_section_visible(Section::Favorites, !movies.is_empty());
        self.presenter
            .render(Container::Favorites, &movies, RenderMode::Replace);
    }
}
