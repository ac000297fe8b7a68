//! Search controller: issues search requests and reconciles responses.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use super::session::{SearchRequest, SearchSession, SearchSnapshot};
use crate::catalog::{MovieCatalog, MovieList};
use crate::metrics::{SEARCH_PAGES_APPLIED, STALE_RESPONSES_DROPPED};
use crate::presenter::{Container, Presenter, RenderMode, View, FETCH_FAILED_MESSAGE};

/// What became of a search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The response was applied and rendered.
    Applied { page: u32, received: usize },
    /// Empty query; switched back to the browse view.
    Browse,
    /// Nothing left to load.
    Exhausted,
    /// A newer request took over; the response was dropped.
    Superseded,
    /// Transport failure, already alerted. Session unchanged.
    Failed { message: String },
}

/// Owns the search session and drives it from UI events.
pub struct SearchController {
    catalog: Arc<dyn MovieCatalog>,
    presenter: Arc<dyn Presenter>,
    session: Mutex<SearchSession>,
}

impl SearchController {
    pub fn new(catalog: Arc<dyn MovieCatalog>, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            catalog,
            presenter,
            session: Mutex::new(SearchSession::new()),
        }
    }

    /// Start a new search for `text`.
    ///
    /// Cancels whatever is in flight. An empty query returns to the browse
    /// view without fetching.
    pub async fn submit_query(&self, text: &str) -> SearchOutcome {
        let query = text.trim();

        let request = {
            let mut session = self.session();
            let request = session.reset(query);

            match request {
                None => self.presenter.show_view(View::Browse),
                Some(_) => {
                    self.presenter.show_view(View::Search);
                    self.presenter
                        .render(Container::SearchResults, &[], RenderMode::Replace);
                    self.presenter
                        .update_search_status(&session.pending_status());
                }
            }
            request
        };

        match request {
            Some(request) => self.execute(request).await,
            None => SearchOutcome::Browse,
        }
    }

    /// Fetch and append the next page of the current query.
    pub async fn load_next_page(&self) -> SearchOutcome {
        let request = self.session().next_page();

        match request {
            Some(request) => self.execute(request).await,
            None => {
                debug!("Load more ignored: no further pages");
                SearchOutcome::Exhausted
            }
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.session().snapshot()
    }

    async fn execute(&self, request: SearchRequest) -> SearchOutcome {
        let list = MovieList::search(request.query.clone());

        debug!(
            "Search request: query='{}', page={}, generation={}",
            request.query, request.page, request.generation
        );

        let result = tokio::select! {
            biased;
            _ = request.token.cancelled() => None,
            result = self.catalog.fetch_page(&list, request.page) => Some(result),
        };

        // Held while presenting so renders land in session order.
        let mut session = self.session();

        let result = match result {
            Some(result) if session.is_current(&request) => result,
            _ => {
                STALE_RESPONSES_DROPPED.with_label_values(&["search"]).inc();
                debug!(
                    "Dropping superseded response: query='{}', page={}, generation={}",
                    request.query, request.page, request.generation
                );
                return SearchOutcome::Superseded;
            }
        };

        match result {
            Ok(page) => {
                let status = session.apply(&request, &page);
                self.presenter.update_search_status(&status);
                if !status.no_results {
                    self.presenter
                        .render(Container::SearchResults, &page.results, request.mode);
                }

                let mode = match request.mode {
                    RenderMode::Replace => "replace",
                    RenderMode::Append => "append",
                };
                SEARCH_PAGES_APPLIED.with_label_values(&[mode]).inc();

                SearchOutcome::Applied {
                    page: request.page,
                    received: page.results.len(),
                }
            }
            Err(e) => {
                session.finish(&request);
                warn!(
                    "Search failed: query='{}', page={}: {}",
                    request.query, request.page, e
                );
                self.presenter.alert(FETCH_FAILED_MESSAGE);
                SearchOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    fn session(&self) -> MutexGuard<'_, SearchSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
