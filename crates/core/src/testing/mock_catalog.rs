//! Mock movie catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, Semaphore};

use crate::catalog::{CatalogError, MovieCatalog, MovieList, MoviePage};

/// A recorded catalog request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub list: MovieList,
    pub page: u32,
}

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable pages per listing
/// - Track requests for assertions
/// - Simulate failures
/// - Hold a listing's responses until released (out-of-order delivery)
///
/// # Example
///
/// ```rust,ignore
/// use reelscout_core::testing::{MockCatalog, fixtures};
///
/// let catalog = MockCatalog::new();
/// let list = MovieList::search("batman");
/// catalog.set_page(&list, fixtures::movie_page(1, 20, 1, 3, 55)).await;
///
/// let page = catalog.fetch_page(&list, 1).await?;
/// assert_eq!(page.results.len(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    /// Pages by (listing, page number).
    pages: Arc<RwLock<HashMap<(MovieList, u32), MoviePage>>>,
    /// Recorded requests.
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    /// If set, the next request will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    /// Listings whose responses are held back.
    gates: Arc<RwLock<HashMap<MovieList, Arc<Semaphore>>>>,
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Page Configuration
    // =========================================================================

    /// Serve `page` for `list` at `page.page`.
    pub async fn set_page(&self, list: &MovieList, page: MoviePage) {
        self.pages
            .write()
            .await
            .insert((list.clone(), page.page), page);
    }

    // =========================================================================
    // Request Recording
    // =========================================================================

    /// Get all recorded requests.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    /// Number of requests made for a listing.
    pub async fn request_count(&self, list: &MovieList) -> usize {
        self.requests
            .read()
            .await
            .iter()
            .filter(|r| &r.list == list)
            .count()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next request to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    // =========================================================================
    // Delivery Control
    // =========================================================================

    /// Hold responses for `list` until [`release`](Self::release) is called.
    pub async fn hold(&self, list: &MovieList) {
        self.gates
            .write()
            .await
            .insert(list.clone(), Arc::new(Semaphore::new(0)));
    }

    /// Let held responses for `list` through.
    pub async fn release(&self, list: &MovieList) {
        if let Some(gate) = self.gates.write().await.remove(list) {
            gate.close();
        }
    }

    async fn wait_gate(&self, list: &MovieList) {
        let gate = self.gates.read().await.get(list).cloned();
        if let Some(gate) = gate {
            // Closing the semaphore is the release signal.
            let _ = gate.acquire().await;
        }
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, list: &MovieList, page: u32) {
        self.requests.write().await.push(RecordedRequest {
            list: list.clone(),
            page,
        });
    }
}

#[async_trait]
impl MovieCatalog for MockCatalog {
    async fn fetch_page(&self, list: &MovieList, page: u32) -> Result<MoviePage, CatalogError> {
        self.record(list, page).await;
        self.wait_gate(list).await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let configured = self.pages.read().await.get(&(list.clone(), page)).cloned();
        Ok(configured.unwrap_or_else(|| MoviePage {
            page,
            ..MoviePage::empty()
        }))
    }
}
