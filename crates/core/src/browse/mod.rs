//! Curated lists shown in the browse view.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::catalog::{MovieCatalog, MovieList};
use crate::presenter::{Container, Presenter, RenderMode, FETCH_FAILED_MESSAGE};

/// The curated lists and the container each one fills.
pub const BROWSE_LISTS: [(MovieList, Container); 3] = [
    (MovieList::Popular, Container::Popular),
    (MovieList::TopRated, Container::TopRated),
    (MovieList::Upcoming, Container::Upcoming),
];

/// Loads the first page of each curated list.
pub struct BrowseFeed {
    catalog: Arc<dyn MovieCatalog>,
    presenter: Arc<dyn Presenter>,
}

impl BrowseFeed {
    pub fn new(catalog: Arc<dyn MovieCatalog>, presenter: Arc<dyn Presenter>) -> Self {
        Self { catalog, presenter }
    }

    /// Fetch every curated list concurrently behind the loading overlay.
    ///
    /// Returns how many lists were rendered. Each failure alerts once.
    pub async fn load_all(&self) -> usize {
        self.presenter.set_loading(true);
        let loaded = join_all(
            BROWSE_LISTS
                .iter()
                .map(|(list, container)| self.load(list, *container)),
        )
        .await;
        self.presenter.set_loading(false);

        let rendered = loaded.into_iter().filter(|ok| *ok).count();
        info!("Browse lists loaded: {}/{}", rendered, BROWSE_LISTS.len());
        rendered
    }

    /// Fetch page 1 of `list` into `container`.
    pub async fn load(&self, list: &MovieList, container: Container) -> bool {
        match self.catalog.fetch_page(list, 1).await {
            Ok(page) => {
                self.presenter
                    .render(container, &page.results, RenderMode::Replace);
                true
            }
            Err(e) => {
                warn!("Failed to load {} list: {}", list.kind(), e);
                self.presenter.alert(FETCH_FAILED_MESSAGE);
                false
            }
        }
    }
}
